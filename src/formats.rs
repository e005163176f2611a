/// Output format selection
///
/// The destination's file extension is the only thing that picks the
/// encoder. Unknown or missing extensions are rejected instead of falling
/// back to a default format.
use crate::error::{CompressionError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Encoders the tool can write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy, honours the quality setting
    Jpeg,
    /// Lossless, optionally recompressed with oxipng
    Png,
    /// Lossless WebP
    WebP,
    /// Lossy AV1 still image, honours the quality setting
    Avif,
    Bmp,
    Tiff,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::WebP => "WebP",
            OutputFormat::Avif => "AVIF",
            OutputFormat::Bmp => "BMP",
            OutputFormat::Tiff => "TIFF",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputFormat {
    type Err = CompressionError;

    /// Parses an extension (without the dot), case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            "webp" => Ok(OutputFormat::WebP),
            "avif" => Ok(OutputFormat::Avif),
            "bmp" => Ok(OutputFormat::Bmp),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            _ => Err(CompressionError::UnsupportedOutputFormat(format!(".{}", s))),
        }
    }
}

/// Determine the output encoder from the destination path's extension
pub fn output_format_for_path(output_path: &Path) -> Result<OutputFormat> {
    match output_path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => OutputFormat::from_str(ext),
        None => Err(CompressionError::UnsupportedOutputFormat(format!(
            "{} has no file extension",
            output_path.display()
        ))),
    }
}
