use crate::constants::{
    AVIF_SPEED, LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, OXIPNG_PRESET, ZOPFLI_ITERATIONS,
};
use crate::error::{CompressionError, Result};
use crate::formats::OutputFormat;
use crate::processing::CompressionOptions;
use image::codecs::avif::AvifEncoder;
use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::codecs::tiff::TiffEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ColorType, DynamicImage};
use oxipng::{Deflaters, Options};
use std::borrow::Cow;
use std::io::Cursor;
use std::num::NonZeroU8;
use std::path::Path;

/// Encodes `img` in memory for `format`. Nothing touches the filesystem
/// here; `destination` is only used for error messages.
pub fn encode_image(
    img: &DynamicImage,
    format: OutputFormat,
    options: &CompressionOptions,
    destination: &Path,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let fail = |e: image::ImageError| CompressionError::write_failure(destination, e);
    let img = normalize_for(format, img);

    match format {
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, options.quality);
            img.write_with_encoder(encoder).map_err(fail)?;
        }
        OutputFormat::Png => {
            let encoder = PngEncoder::new_with_quality(
                &mut buf,
                CompressionType::Best,
                PngFilterType::Adaptive,
            );
            img.write_with_encoder(encoder).map_err(fail)?;

            if options.optimize {
                buf = optimize_png(&buf, options.quality, destination)?;
            }
        }
        OutputFormat::WebP => {
            img.write_with_encoder(WebPEncoder::new_lossless(&mut buf))
                .map_err(fail)?;
        }
        OutputFormat::Avif => {
            let encoder = AvifEncoder::new_with_speed_quality(&mut buf, AVIF_SPEED, options.quality);
            img.write_with_encoder(encoder).map_err(fail)?;
        }
        OutputFormat::Bmp => {
            img.write_with_encoder(BmpEncoder::new(&mut buf))
                .map_err(fail)?;
        }
        OutputFormat::Tiff => {
            let cursor = Cursor::new(&mut buf);
            img.write_with_encoder(TiffEncoder::new(cursor))
                .map_err(fail)?;
        }
    }

    Ok(buf)
}

/// Converts `img` to a colour type the encoder for `format` accepts.
/// Bitmaps that already fit are borrowed as is.
///
/// * JPEG: 8-bit grey or RGB, alpha dropped
/// * PNG: any 8- or 16-bit integer type; float becomes 16-bit
/// * TIFF: grey, RGB or RGBA; grey+alpha widens to RGBA
/// * WebP: 8-bit grey, grey+alpha, RGB or RGBA
/// * AVIF, BMP: 8-bit RGB or RGBA
pub fn normalize_for(format: OutputFormat, img: &DynamicImage) -> Cow<'_, DynamicImage> {
    let color = img.color();
    let converted = match format {
        OutputFormat::Jpeg => match color {
            ColorType::L8 | ColorType::Rgb8 => None,
            ColorType::L16 | ColorType::La8 | ColorType::La16 => {
                Some(DynamicImage::ImageLuma8(img.to_luma8()))
            }
            _ => Some(DynamicImage::ImageRgb8(img.to_rgb8())),
        },
        OutputFormat::Png => match color {
            ColorType::L8
            | ColorType::La8
            | ColorType::Rgb8
            | ColorType::Rgba8
            | ColorType::L16
            | ColorType::La16
            | ColorType::Rgb16
            | ColorType::Rgba16 => None,
            _ => Some(to_sixteen_bit(img)),
        },
        OutputFormat::Tiff => match color {
            ColorType::L8
            | ColorType::Rgb8
            | ColorType::Rgba8
            | ColorType::L16
            | ColorType::Rgb16
            | ColorType::Rgba16 => None,
            ColorType::La8 => Some(DynamicImage::ImageRgba8(img.to_rgba8())),
            _ => Some(to_sixteen_bit(img)),
        },
        OutputFormat::WebP => match color {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => None,
            _ => Some(to_eight_bit(img)),
        },
        OutputFormat::Avif | OutputFormat::Bmp => match color {
            ColorType::Rgb8 | ColorType::Rgba8 => None,
            _ => Some(to_eight_bit(img)),
        },
    };

    converted.map_or(Cow::Borrowed(img), Cow::Owned)
}

/// Recompresses PNG bytes with oxipng. Higher quality settings buy a slower,
/// stronger deflater.
fn optimize_png(data: &[u8], quality: u8, destination: &Path) -> Result<Vec<u8>> {
    let mut oxipng_options = Options::from_preset(OXIPNG_PRESET);

    oxipng_options.deflate = if quality >= 90 {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap_or(NonZeroU8::MIN),
        }
    } else if quality >= 70 {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };

    oxipng::optimize_from_memory(data, &oxipng_options).map_err(|e| {
        CompressionError::write_failure(destination, format!("PNG optimization failed: {}", e))
    })
}

fn to_eight_bit(img: &DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    }
}

fn to_sixteen_bit(img: &DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        DynamicImage::ImageRgba16(img.to_rgba16())
    } else {
        DynamicImage::ImageRgb16(img.to_rgb16())
    }
}
