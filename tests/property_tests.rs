use image::{DynamicImage, GenericImageView};
use img_shrink::{
    downscale, output_format_for_path, parse_divisor, target_dimensions, CompressionError,
    CompressionOptions, ResampleFilter,
};
use proptest::prelude::*;
use std::num::NonZeroU32;
use std::path::Path;

proptest! {
    #[test]
    fn target_dimensions_floor_divide(
        width in 1u32..=20_000u32,
        height in 1u32..=20_000u32,
        divisor in 1u32..=500u32
    ) {
        let d = NonZeroU32::new(divisor).unwrap();
        match target_dimensions(width, height, d) {
            Ok((w, h)) => {
                prop_assert_eq!(w, width / divisor);
                prop_assert_eq!(h, height / divisor);
                prop_assert!(w >= 1 && h >= 1);
            }
            Err(CompressionError::DegenerateResolution { .. }) => {
                prop_assert!(width < divisor || height < divisor);
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn divisor_one_is_identity(width in 1u32..=20_000u32, height in 1u32..=20_000u32) {
        let d = NonZeroU32::new(1).unwrap();
        prop_assert_eq!(target_dimensions(width, height, d).unwrap(), (width, height));
    }

    #[test]
    fn parse_divisor_matches_positive_integers(n in 0i64..=100_000i64) {
        let result = parse_divisor(&n.to_string());
        if n == 0 {
            prop_assert!(
                matches!(result, Err(CompressionError::InvalidDivisor(_))),
                "zero must be rejected"
            );
        } else {
            prop_assert_eq!(result.unwrap().get() as i64, n);
        }
    }

    #[test]
    fn parse_divisor_rejects_negatives(n in 1i64..=100_000i64) {
        let result = parse_divisor(&format!("-{}", n));
        prop_assert!(
            matches!(result, Err(CompressionError::InvalidDivisor(_))),
            "negative must be rejected"
        );
    }

    #[test]
    fn parse_divisor_rejects_non_numeric(text in "[a-zA-Z .,_]{0,12}") {
        prop_assert!(parse_divisor(&text).is_err());
    }

    #[test]
    fn downscale_hits_requested_size(
        width in 2u32..=300u32,
        height in 2u32..=300u32,
        divisor in 1u32..=8u32,
        filter in prop::sample::select(vec![
            ResampleFilter::Lanczos3,
            ResampleFilter::CatmullRom,
            ResampleFilter::Gaussian,
            ResampleFilter::Triangle,
        ])
    ) {
        let d = NonZeroU32::new(divisor).unwrap();
        prop_assume!(target_dimensions(width, height, d).is_ok());
        let (w, h) = target_dimensions(width, height, d).unwrap();

        let img = downscale(DynamicImage::new_rgb8(width, height), w, h, filter);
        prop_assert_eq!(img.dimensions(), (w, h));
    }

    #[test]
    fn compression_options_quality_range(quality in 0u8..=255u8) {
        let result = CompressionOptions::new(Some(quality), None, None);
        if (1..=100).contains(&quality) {
            prop_assert_eq!(result.unwrap().quality, quality);
        } else {
            prop_assert!(
                matches!(result, Err(CompressionError::InvalidQuality(q)) if q == quality),
                "quality out of range must be rejected"
            );
        }
    }

    #[test]
    fn output_format_follows_extension(
        stem in "[a-zA-Z0-9_-]{1,12}",
        extension in prop::sample::select(vec![
            "jpg", "JPEG", "png", "webp", "avif", "bmp", "tif", "tiff", "gif", "txt", "heic",
        ])
    ) {
        let filename = format!("{}.{}", stem, extension);
        let result = output_format_for_path(Path::new(&filename));

        let supported = matches!(
            extension.to_lowercase().as_str(),
            "jpg" | "jpeg" | "png" | "webp" | "avif" | "bmp" | "tif" | "tiff"
        );
        prop_assert_eq!(result.is_ok(), supported);
    }
}
