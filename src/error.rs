use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeotagError {
    #[error("Malformed {tag} field: {reason}")]
    MalformedField { tag: &'static str, reason: String },

    #[error("Zero denominator in rational {num}/0")]
    ZeroDenominator { num: u32 },

    #[error("Failed to parse EXIF metadata")]
    Exif(#[from] exif::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeotagError>;
