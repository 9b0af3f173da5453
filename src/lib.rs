//! Extracts GPS geotags from image EXIF metadata into the plain-text
//! `<image> <lat> <lon> <alt>` format COLMAP reads reference positions from.

pub mod constants;
pub mod error;
pub mod exif_parser;
pub mod gps;
pub mod logger;
pub mod processing;
pub mod scanner;
pub mod settings;
pub mod writer;

pub use error::GeotagError;
pub use processing::{run, RunSummary};
pub use settings::GeotagConfig;
