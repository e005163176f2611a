use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use img_shrink::encode::encode_image;
use img_shrink::{compress, downscale, target_dimensions, CompressionOptions, OutputFormat, ResampleFilter};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    let buf = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(buf)
}

fn create_test_file(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("source.png");
    create_test_image(width, height).save(&path).unwrap();
    path
}

fn bench_downscale_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("downscale");
    let img = create_test_image(1920, 1080);
    let divisor = NonZeroU32::new(4).unwrap();
    let (w, h) = target_dimensions(1920, 1080, divisor).unwrap();

    for filter in [
        ResampleFilter::Lanczos3,
        ResampleFilter::CatmullRom,
        ResampleFilter::Gaussian,
        ResampleFilter::Triangle,
    ] {
        group.bench_with_input(
            BenchmarkId::new("filter", filter.to_string()),
            &filter,
            |b, &filter| b.iter(|| downscale(black_box(img.clone()), w, h, filter)),
        );
    }

    group.finish();
}

fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.sample_size(10);
    let img = create_test_image(480, 270);
    let fast_png = CompressionOptions::new(None, Some(false), None).unwrap();
    let defaults = CompressionOptions::default();

    for (name, format, options) in [
        ("jpeg", OutputFormat::Jpeg, &defaults),
        ("png", OutputFormat::Png, &fast_png),
        ("png_optimized", OutputFormat::Png, &defaults),
        ("webp", OutputFormat::WebP, &defaults),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| encode_image(black_box(&img), format, options, Path::new("bench")))
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let src = create_test_file(temp_dir.path(), 1280, 720);
    let dst = temp_dir.path().join("out.jpg");

    c.bench_function("compress_1280x720_by_2_to_jpeg", |b| {
        b.iter(|| compress(black_box(&src), black_box(&dst), 2))
    });
}

criterion_group!(benches, bench_downscale_filters, bench_encoders, bench_full_pipeline);
criterion_main!(benches);
