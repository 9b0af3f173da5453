use crate::constants::{ALTITUDE_DECIMALS, COORD_DECIMALS};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One geotagged image, in the units the output file uses.
#[derive(Debug, Clone, PartialEq)]
pub struct GeotagRecord {
    pub filename: String,
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

impl GeotagRecord {
    /// `<filename> <lat> <lon> <alt>`, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{} {:.coord$} {:.coord$} {:.alt$}",
            self.filename,
            self.lat,
            self.lon,
            self.alt,
            coord = COORD_DECIMALS,
            alt = ALTITUDE_DECIMALS,
        )
    }
}

/// Writes geotag lines in the format COLMAP reads reference image positions from.
pub struct GeotagWriter<W: Write> {
    out: W,
    written: usize,
}

impl GeotagWriter<BufWriter<File>> {
    /// Creates the output file, truncating any previous run's content.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> GeotagWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn write_record(&mut self, record: &GeotagRecord) -> io::Result<()> {
        writeln!(self.out, "{}", record.to_line())?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
