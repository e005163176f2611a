use crate::constants::{DEFAULT_QUALITY, MAX_IMAGE_DIMENSION, MAX_QUALITY, MIN_QUALITY, WORKER_THREAD_NAME};
use crate::encode::encode_image;
use crate::error::{CompressionError, Result};
use crate::formats::OutputFormat;
use crate::output::write_atomically;
use crate::request::CompressionRequest;
use crate::resize::{downscale, target_dimensions, ResampleFilter};
use crate::utils::calculate_compression_ratio;
use crate::validation::{validate_destination, validate_source};
use crate::verbose;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, Limits};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOptions {
    pub quality: u8,
    pub optimize: bool,
    pub filter: ResampleFilter,
}

impl CompressionOptions {
    pub fn new(
        quality: Option<u8>,
        optimize: Option<bool>,
        filter: Option<ResampleFilter>,
    ) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }

        Ok(Self {
            quality,
            optimize: optimize.unwrap_or(true),
            filter: filter.unwrap_or_default(),
        })
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            optimize: true,
            filter: ResampleFilter::default(),
        }
    }
}

/// What a successful compression produced
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub format: OutputFormat,
    pub original_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
    pub original_size: u64,
    pub output_size: u64,
}

impl CompressionReport {
    /// Percentage of bytes saved; negative when the output grew
    pub fn compression_ratio(&self) -> f64 {
        calculate_compression_ratio(self.original_size, self.output_size)
    }

    /// Confirmation message for the user
    pub fn summary(&self) -> String {
        format!(
            "The requested image file has been compressed successfully and saved at {}",
            self.destination.display()
        )
    }
}

/// Downscales `source` by `divisor` and writes the result to `destination`
/// with the default options (quality 90, optimization on, Lanczos3).
///
/// # Example
/// ```
/// use img_shrink::{compress, CompressionError};
///
/// let result = compress("/nonexistent.png", "out.png", 2);
/// assert!(matches!(result, Err(CompressionError::FileNotFound(_))));
/// ```
pub fn compress(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    divisor: u32,
) -> Result<CompressionReport> {
    // Source is checked ahead of the divisor so a missing file wins
    let original_size = validate_source(source.as_ref())?;
    let request = CompressionRequest::new(source.as_ref(), destination.as_ref(), divisor)?;
    run_pipeline(&request, &CompressionOptions::default(), original_size)
}

/// Same as [`compress`] but takes the divisor as the text a user typed.
pub fn compress_from_input(
    source: &str,
    divisor: &str,
    destination: &str,
    options: &CompressionOptions,
) -> Result<CompressionReport> {
    let original_size = validate_source(Path::new(source))?;
    let request = CompressionRequest::from_input(source, divisor, destination)?;
    run_pipeline(&request, options, original_size)
}

/// Runs the whole pipeline for one request:
/// validate -> decode -> compute target -> resample -> encode -> atomic write
///
/// All inputs are validated before the source is decoded, and nothing is
/// written to the destination unless every step succeeded.
pub fn compress_request(
    request: &CompressionRequest,
    options: &CompressionOptions,
) -> Result<CompressionReport> {
    let original_size = validate_source(request.source())?;
    run_pipeline(request, options, original_size)
}

// Everything after source validation; `original_size` comes from that check
fn run_pipeline(
    request: &CompressionRequest,
    options: &CompressionOptions,
    original_size: u64,
) -> Result<CompressionReport> {
    let source = request.source();
    let destination = request.destination();

    let format = validate_destination(destination)?;
    verbose!(
        "Validated {:?} ({} bytes) -> {:?} as {}",
        source,
        original_size,
        destination,
        format
    );

    let img = load_image(source)?;
    let original_dimensions = img.dimensions();

    let (width, height) = target_dimensions(
        original_dimensions.0,
        original_dimensions.1,
        request.divisor(),
    )?;
    verbose!(
        "Resizing {}x{} -> {}x{} with {}",
        original_dimensions.0,
        original_dimensions.1,
        width,
        height,
        options.filter
    );

    let img = downscale(img, width, height, options.filter);

    let bytes = encode_image(&img, format, options, destination)?;
    verbose!("Encoded {} bytes of {}", bytes.len(), format);

    write_atomically(destination, &bytes)?;

    Ok(CompressionReport {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        format,
        original_dimensions,
        output_dimensions: (width, height),
        original_size,
        output_size: bytes.len() as u64,
    })
}

/// Runs [`compress_request`] on a dedicated worker thread so a caller with
/// an event loop is not blocked while the image is processed.
pub fn spawn_compression(
    request: CompressionRequest,
    options: CompressionOptions,
) -> io::Result<JoinHandle<Result<CompressionReport>>> {
    thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || compress_request(&request, &options))
}

/// Decodes an image, sniffing the format from its content rather than the
/// extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    load_image_with_format(path).map(|(img, _)| img)
}

/// Decodes an image and reports the format it was sniffed as.
///
/// The header is read first and oversized images are refused before any
/// pixel buffer is allocated.
///
/// # Returns
/// * `Ok((image, format))` - The decoded bitmap and its detected format
/// * `Err(CompressionError::UnsupportedOrCorruptImage)` - If it cannot be decoded
/// * `Err(CompressionError::DimensionsTooLarge)` - If either side is over the limit
pub fn load_image_with_format(path: &Path) -> Result<(DynamicImage, ImageFormat)> {
    let (width, height) = open_reader(path)?
        .into_dimensions()
        .map_err(|e| CompressionError::corrupt(path, e))?;
    check_dimensions(width, height, MAX_IMAGE_DIMENSION)?;

    let mut reader = open_reader(path)?;
    let format = reader
        .format()
        .ok_or_else(|| CompressionError::corrupt(path, "unrecognized image format"))?;

    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_IMAGE_DIMENSION);
    limits.max_image_height = Some(MAX_IMAGE_DIMENSION);
    reader.limits(limits);
    let img = reader
        .decode()
        .map_err(|e| CompressionError::corrupt(path, e))?;

    Ok((img, format))
}

fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    let reader = ImageReader::open(path)
        .map_err(|_| CompressionError::FileNotFound(path.to_path_buf()))?
        .with_guessed_format()
        .map_err(|e| CompressionError::corrupt(path, e))?;

    if reader.format().is_none() {
        return Err(CompressionError::corrupt(path, "unrecognized image format"));
    }
    Ok(reader)
}

fn check_dimensions(width: u32, height: u32, max: u32) -> Result<()> {
    if width > max || height > max {
        return Err(CompressionError::DimensionsTooLarge(width, height, max));
    }
    Ok(())
}
