use super::tags::GpsTags;
use crate::error::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

// kamadak-exif reports an unidentified container with this message
const UNKNOWN_FORMAT: &str = "Unknown image format";

/// Reads the GPS tags of an image without decoding its pixels.
///
/// A file without any EXIF block, or whose container is not recognized at
/// all, yields empty tags. Recoverable structure errors are tolerated and
/// whatever could be parsed is used.
pub fn read_gps_tags(path: &Path) -> Result<GpsTags> {
    let file = File::open(path)?;
    let mut buf_reader = BufReader::new(file);
    let mut exif_reader = exif::Reader::new();
    exif_reader.continue_on_error(true); // Tolerate non-standard EXIF structures

    match exif_reader.read_from_container(&mut buf_reader) {
        Ok(exif) => Ok(GpsTags::from_exif(&exif)),
        Err(exif::Error::PartialResult(partial)) => {
            let (exif, errors) = partial.into_inner();
            debug!(
                "{}: using partial EXIF, {} errors skipped: {:?}",
                path.display(),
                errors.len(),
                errors
            );
            Ok(GpsTags::from_exif(&exif))
        }
        Err(exif::Error::NotFound(container)) => {
            debug!("{}: no EXIF block in {} container", path.display(), container);
            Ok(GpsTags::default())
        }
        Err(exif::Error::InvalidFormat(msg)) if msg == UNKNOWN_FORMAT => {
            debug!("{}: container not recognized, no metadata read", path.display());
            Ok(GpsTags::default())
        }
        Err(e) => Err(e.into()),
    }
}
