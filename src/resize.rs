use crate::error::{CompressionError, Result};
use clap::ValueEnum;
use image::imageops::FilterType;
use image::DynamicImage;
use std::fmt;
use std::num::NonZeroU32;

/// Smoothing filters available for downscaling. Nearest-neighbour is left
/// out on purpose: it aliases badly at large divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
}

impl ResampleFilter {
    pub fn to_filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Triangle => FilterType::Triangle,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResampleFilter::Lanczos3 => "lanczos3",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Gaussian => "gaussian",
            ResampleFilter::Triangle => "triangle",
        };
        write!(f, "{}", name)
    }
}

/// Target resolution for a divisor: both sides floor-divided.
///
/// # Returns
/// * `Ok((width, height))` - Both at least 1
/// * `Err(CompressionError::DegenerateResolution)` - If either side floors to 0
pub fn target_dimensions(width: u32, height: u32, divisor: NonZeroU32) -> Result<(u32, u32)> {
    let d = divisor.get();
    let (new_width, new_height) = (width / d, height / d);

    if new_width == 0 || new_height == 0 {
        return Err(CompressionError::DegenerateResolution {
            width,
            height,
            divisor: d,
        });
    }

    Ok((new_width, new_height))
}

/// Resample `img` to `width`x`height`. Same-size requests return the bitmap
/// untouched.
pub fn downscale(img: DynamicImage, width: u32, height: u32, filter: ResampleFilter) -> DynamicImage {
    if img.width() == width && img.height() == height {
        return img;
    }
    img.resize_exact(width, height, filter.to_filter_type())
}
