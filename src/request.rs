use crate::error::{CompressionError, Result};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// One downscale job: where to read, how much to shrink, where to write.
///
/// The divisor is stored as `NonZeroU32`, so a request that reaches the
/// processing pipeline can never divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionRequest {
    source: PathBuf,
    destination: PathBuf,
    divisor: NonZeroU32,
}

impl CompressionRequest {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        divisor: u32,
    ) -> Result<Self> {
        let divisor = NonZeroU32::new(divisor)
            .ok_or_else(|| CompressionError::InvalidDivisor(divisor.to_string()))?;

        Ok(Self {
            source: source.into(),
            destination: destination.into(),
            divisor,
        })
    }

    /// Builds a request from raw form text, parsing the divisor the way a
    /// user types it.
    pub fn from_input(source: &str, divisor: &str, destination: &str) -> Result<Self> {
        let divisor = parse_divisor(divisor)?;
        Ok(Self {
            source: PathBuf::from(source),
            destination: PathBuf::from(destination),
            divisor,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn divisor(&self) -> NonZeroU32 {
        self.divisor
    }
}

/// Parses a divisor typed by a user. Empty, non-numeric, zero, negative and
/// out-of-range text all map to `InvalidDivisor` carrying the original text.
pub fn parse_divisor(text: &str) -> Result<NonZeroU32> {
    text.trim()
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| CompressionError::InvalidDivisor(text.to_string()))
}
