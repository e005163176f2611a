use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("No such file \"{0}\" found on the local machine")]
    FileNotFound(PathBuf),

    #[error("Cannot decode {path:?} as an image: {reason}")]
    UnsupportedOrCorruptImage { path: PathBuf, reason: String },

    #[error("Invalid divisor \"{0}\". Must be a positive integer")]
    InvalidDivisor(String),

    #[error(
        "Divisor {divisor} reduces a {width}x{height} image to zero pixels. Use a smaller divisor"
    )]
    DegenerateResolution { width: u32, height: u32, divisor: u32 },

    #[error("Unsupported output format: {0}. Use one of jpg, jpeg, png, webp, avif, bmp, tif, tiff")]
    UnsupportedOutputFormat(String),

    #[error("Failed to write {path:?}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("File too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("Invalid image dimensions: {0}x{1}. Maximum allowed: {2}x{2}")]
    DimensionsTooLarge(u32, u32, u32),
}

impl CompressionError {
    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CompressionError::UnsupportedOrCorruptImage {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CompressionError::WriteFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompressionError>;
