use crate::error::Result as GeotagResult;
use crate::exif_parser::{read_gps_tags, GpsTag, GpsTags};
use crate::gps::{altitude_to_meters, dms_to_decimal};
use crate::scanner::ImageScanner;
use crate::settings::GeotagConfig;
use crate::writer::{GeotagRecord, GeotagWriter};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Images that passed the extension filter
    pub scanned: usize,
    pub written: usize,
    /// File names of images without usable GPS tags, in processing order
    pub skipped: Vec<String>,
    pub output_file: PathBuf,
}

/// Builds the geotag record of one image from its raw GPS tags.
///
/// Returns `Ok(None)` when any of latitude, longitude (with their references)
/// or altitude is absent. Malformed values are errors.
pub fn extract_geotag(filename: &str, tags: &GpsTags) -> GeotagResult<Option<GeotagRecord>> {
    let lat_tags = (tags.dms(GpsTag::Latitude)?, tags.text(GpsTag::LatitudeRef)?);
    let (Some(lat_dms), Some(lat_ref)) = lat_tags else {
        return Ok(None);
    };
    let lat = dms_to_decimal(&lat_dms, lat_ref)?;

    let lon_tags = (tags.dms(GpsTag::Longitude)?, tags.text(GpsTag::LongitudeRef)?);
    let (Some(lon_dms), Some(lon_ref)) = lon_tags else {
        return Ok(None);
    };
    let lon = dms_to_decimal(&lon_dms, lon_ref)?;

    let Some(altitude) = tags.rational(GpsTag::Altitude)? else {
        return Ok(None);
    };
    let alt = altitude_to_meters(altitude)?;

    if let Ok(Some(alt_ref)) = tags.text(GpsTag::AltitudeRef) {
        debug!("{}: GPSAltitudeRef {:?} not applied", filename, alt_ref);
    }

    Ok(Some(GeotagRecord { filename: filename.to_string(), lat, lon, alt }))
}

pub fn missing_gps_message(filename: &str) -> String {
    format!("No GPS EXIF data found in {}", filename)
}

pub fn summary_message(output_file: &Path) -> String {
    format!("Wrote geotags for COLMAP to {}", output_file.display())
}

/// Reads one image and converts its GPS tags.
pub fn process_image(path: &Path) -> Result<Option<GeotagRecord>> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::Error::msg("Invalid file name"))?;

    let tags = read_gps_tags(path)
        .with_context(|| format!("Failed to read metadata from {}", path.display()))?;
    let record = extract_geotag(&filename, &tags)
        .with_context(|| format!("Failed to convert GPS data of {}", path.display()))?;
    Ok(record)
}

/// Writes one geotag line per image of `config.input_dir` to `config.output_file`.
///
/// Images without GPS tags are reported and skipped. Any other failure aborts
/// the run; lines written before it may or may not have reached the file.
pub fn run(config: &GeotagConfig) -> Result<RunSummary> {
    let scanner = ImageScanner::new(config);
    let images = scanner.iter()?;

    info!("Scanning images in {}", config.input_dir.display());
    let output = config.output_file.display();
    let mut writer = GeotagWriter::create(&config.output_file)
        .with_context(|| format!("Failed to create output file {}", output))?;

    let mut scanned = 0;
    let mut skipped = Vec::new();

    for path in images {
        let path = path?;
        scanned += 1;
        debug!("Reading {}", path.display());

        match process_image(&path)? {
            Some(record) => {
                debug!("{} -> {} {} {}", record.filename, record.lat, record.lon, record.alt);
                writer
                    .write_record(&record)
                    .with_context(|| format!("Failed to write to {}", output))?;
            }
            None => {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                println!("{}", missing_gps_message(&filename));
                skipped.push(filename);
            }
        }
    }

    let written = writer.written();
    writer
        .finish()
        .with_context(|| format!("Failed to flush {}", output))?;

    info!("{} of {} images geotagged, {} without GPS", written, scanned, skipped.len());
    println!("{}", summary_message(&config.output_file));

    Ok(RunSummary { scanned, written, skipped, output_file: config.output_file.clone() })
}
