use crate::constants::INFO_PREFIX;
use crate::error::Result;
use crate::processing::load_image_with_format;
use crate::resize::target_dimensions;
use crate::utils::format_file_size;
use crate::validation::validate_source;
use crate::{info, warn};
use image::{ColorType, GenericImageView, ImageFormat};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub color: ColorType,
    pub file_size: u64,
}

impl ImageInfo {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Resolution the compress operation would produce for `divisor`
    pub fn preview_divisor(&self, divisor: NonZeroU32) -> Result<(u32, u32)> {
        target_dimensions(self.width, self.height, divisor)
    }

    /// Largest divisor that still leaves at least one pixel on each side
    pub fn max_divisor(&self) -> u32 {
        self.width.min(self.height)
    }
}

/// Decodes an image under the same checks as the compress operation and
/// collects what the CLI shows.
pub fn inspect_image(input_path: &Path) -> Result<ImageInfo> {
    let file_size = validate_source(input_path)?;
    let (img, format) = load_image_with_format(input_path)?;
    let (width, height) = img.dimensions();

    Ok(ImageInfo {
        path: input_path.to_path_buf(),
        width,
        height,
        format,
        color: img.color(),
        file_size,
    })
}

pub fn print_image_info(image_info: &ImageInfo, divisor: Option<NonZeroU32>) {
    info!("{} Image Information:", INFO_PREFIX);
    info!("  📁 File: {:?}", image_info.path);
    info!("  📏 Dimensions: {}x{} pixels", image_info.width, image_info.height);
    info!(
        "  📦 File size: {} ({} bytes)",
        format_file_size(image_info.file_size),
        image_info.file_size
    );
    info!("  🎨 Color type: {:?}", image_info.color);
    info!("  🎭 Image format: {:?}", image_info.format);
    info!("  📐 Aspect ratio: {:.2}:1", image_info.aspect_ratio());
    info!("  🔢 Largest usable divisor: {}", image_info.max_divisor());

    if let Some(divisor) = divisor {
        match image_info.preview_divisor(divisor) {
            Ok((w, h)) => info!("\n💡 Divisor {} produces {}x{} pixels", divisor, w, h),
            Err(e) => warn!("{}", e),
        }
    }
}
