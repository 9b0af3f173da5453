use crate::error::{GeotagError, Result};
use crate::gps::Rational;
use exif::{In, Tag, Value};
use std::collections::HashMap;

/// GPS tags the geotag output is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpsTag {
    Latitude,
    LatitudeRef,
    Longitude,
    LongitudeRef,
    Altitude,
    AltitudeRef,
}

impl GpsTag {
    pub const ALL: [GpsTag; 6] = [
        GpsTag::Latitude,
        GpsTag::LatitudeRef,
        GpsTag::Longitude,
        GpsTag::LongitudeRef,
        GpsTag::Altitude,
        GpsTag::AltitudeRef,
    ];

    pub fn exif_tag(self) -> Tag {
        match self {
            GpsTag::Latitude => Tag::GPSLatitude,
            GpsTag::LatitudeRef => Tag::GPSLatitudeRef,
            GpsTag::Longitude => Tag::GPSLongitude,
            GpsTag::LongitudeRef => Tag::GPSLongitudeRef,
            GpsTag::Altitude => Tag::GPSAltitude,
            GpsTag::AltitudeRef => Tag::GPSAltitudeRef,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GpsTag::Latitude => "GPSLatitude",
            GpsTag::LatitudeRef => "GPSLatitudeRef",
            GpsTag::Longitude => "GPSLongitude",
            GpsTag::LongitudeRef => "GPSLongitudeRef",
            GpsTag::Altitude => "GPSAltitude",
            GpsTag::AltitudeRef => "GPSAltitudeRef",
        }
    }
}

/// Raw value of one tag, before any unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Rationals(Vec<Rational>),
    Text(String),
    /// Any other EXIF type, kept in its printable form
    Other(String),
}

impl TagValue {
    fn from_field(field: &exif::Field) -> Self {
        match &field.value {
            Value::Rational(vec) => {
                TagValue::Rationals(vec.iter().copied().map(Rational::from).collect())
            }
            Value::Ascii(vec) => {
                let text = vec
                    .first()
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                    .unwrap_or_default();
                TagValue::Text(text)
            }
            _ => TagValue::Other(field.display_value().to_string()),
        }
    }
}

/// GPS tags found in one image. Absent tags are simply not in the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsTags {
    values: HashMap<GpsTag, TagValue>,
}

impl GpsTags {
    pub fn from_exif(exif: &exif::Exif) -> Self {
        let mut tags = GpsTags::default();
        for tag in GpsTag::ALL {
            if let Some(field) = exif.get_field(tag.exif_tag(), In::PRIMARY) {
                tags.insert(tag, TagValue::from_field(field));
            }
        }
        tags
    }

    pub fn insert(&mut self, tag: GpsTag, value: TagValue) {
        self.values.insert(tag, value);
    }

    pub fn get(&self, tag: GpsTag) -> Option<&TagValue> {
        self.values.get(&tag)
    }

    /// Degrees, minutes and seconds of a coordinate tag.
    pub fn dms(&self, tag: GpsTag) -> Result<Option<[Rational; 3]>> {
        match self.get(tag) {
            None => Ok(None),
            Some(TagValue::Rationals(vec)) => match vec.as_slice() {
                [d, m, s] => Ok(Some([*d, *m, *s])),
                _ => Err(malformed(tag, format!("expected 3 rationals, got {}", vec.len()))),
            },
            Some(other) => Err(malformed(tag, format!("expected rationals, got {:?}", other))),
        }
    }

    /// First rational of the tag, e.g. GPSAltitude.
    pub fn rational(&self, tag: GpsTag) -> Result<Option<Rational>> {
        match self.get(tag) {
            None => Ok(None),
            Some(TagValue::Rationals(vec)) => vec
                .first()
                .copied()
                .map(Some)
                .ok_or_else(|| malformed(tag, "empty rational list".to_string())),
            Some(other) => Err(malformed(tag, format!("expected a rational, got {:?}", other))),
        }
    }

    /// Printable form of a reference tag.
    pub fn text(&self, tag: GpsTag) -> Result<Option<&str>> {
        match self.get(tag) {
            None => Ok(None),
            Some(TagValue::Text(s)) | Some(TagValue::Other(s)) => Ok(Some(s.as_str())),
            Some(TagValue::Rationals(_)) => {
                Err(malformed(tag, "expected text, got rationals".to_string()))
            }
        }
    }
}

fn malformed(tag: GpsTag, reason: String) -> GeotagError {
    GeotagError::MalformedField { tag: tag.name(), reason }
}
