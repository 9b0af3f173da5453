use crate::error::{GeotagError, Result};
use tracing::warn;

/// Unsigned EXIF RATIONAL: an exact `num / denom` fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub num: u32,
    pub denom: u32,
}

impl Rational {
    pub const fn new(num: u32, denom: u32) -> Self {
        Self { num, denom }
    }

    pub fn to_f64(self) -> Result<f64> {
        if self.denom == 0 {
            return Err(GeotagError::ZeroDenominator { num: self.num });
        }
        Ok(f64::from(self.num) / f64::from(self.denom))
    }
}

impl From<exif::Rational> for Rational {
    fn from(r: exif::Rational) -> Self {
        Self::new(r.num, r.denom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn parse(reference: &str) -> Option<Self> {
        match reference.trim() {
            "N" => Some(Self::North),
            "S" => Some(Self::South),
            "E" => Some(Self::East),
            "W" => Some(Self::West),
            _ => None,
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

/// Converts a degrees/minutes/seconds triplet to signed decimal degrees.
///
/// `S` and `W` negate the result. Any other reference, including one that is
/// not a hemisphere letter at all, leaves it positive.
pub fn dms_to_decimal(dms: &[Rational; 3], reference: &str) -> Result<f64> {
    let degrees = dms[0].to_f64()?;
    let minutes = dms[1].to_f64()?;
    let seconds = dms[2].to_f64()?;
    let decimal = degrees + (minutes / 60.0) + (seconds / 3600.0);

    match Hemisphere::parse(reference) {
        Some(hemisphere) if hemisphere.is_negative() => Ok(-decimal),
        Some(_) => Ok(decimal),
        None => {
            warn!("Unrecognized hemisphere reference {:?}, treating as positive", reference);
            Ok(decimal)
        }
    }
}

/// Altitude in meters, as encoded (GPSAltitudeRef is not applied).
pub fn altitude_to_meters(altitude: Rational) -> Result<f64> {
    altitude.to_f64()
}
