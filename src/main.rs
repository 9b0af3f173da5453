use anyhow::Result;
use exif_geotags::{logger, GeotagConfig};
use tracing::info;

fn main() -> Result<()> {
    logger::init();

    let config = GeotagConfig::load()?;
    info!(
        "Input: {}, output: {}, extensions: {}",
        config.input_dir.display(),
        config.output_file.display(),
        config.extensions.join(", ")
    );

    exif_geotags::run(&config)?;
    Ok(())
}
