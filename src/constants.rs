// Input / output defaults
pub const INPUT_DIR: &str = "input";
pub const OUTPUT_FILE: &str = "geotags.txt";

// Compared case-insensitively against the file extension
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "tif", "png"];

// Optional overrides, looked up next to the executable
pub const SETTINGS_FILE: &str = "geotags.ini";

// Output precision
pub const COORD_DECIMALS: usize = 8;
pub const ALTITUDE_DECIMALS: usize = 3;
