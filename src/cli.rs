use crate::resize::ResampleFilter;
use clap::{Parser, Subcommand};
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-shrink",
    about = "Downscale an image by an integer divisor and save a re-encoded copy",
    long_about = "img-shrink divides the width and height of an image by a whole number, \
                  resamples it with a smoothing filter and saves the result. \
                  The output format follows the output file's extension \
                  (jpg, jpeg, png, webp, avif, bmp, tif, tiff).",
    version,
    after_help = "EXAMPLES:\n  \
    img-shrink compress photo.jpg photo_small.png -d 2\n  \
    img-shrink compress scan.png scan_thumb.jpg -d 8 -q 75 --filter catmull-rom\n  \
    img-shrink info photo.jpg -d 4"
)]
pub struct Args {
    #[arg(long, global = true, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, global = true, help = "Print each processing step")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Downscale a single image file",
        long_about = "Divide both dimensions of the input image by DIVISOR (rounding down) \
                      and write the result to OUTPUT. Entering 2 halves the resolution. \
                      A divisor that would shrink either side to zero pixels is rejected."
    )]
    Compress {
        #[arg(help = "Input image file path")]
        input: String,

        #[arg(help = "Output image file path, including its extension")]
        output: String,

        // Kept as text so bad input surfaces as an invalid-divisor error
        #[arg(
            short = 'd',
            long,
            allow_hyphen_values = true,
            help = "Positive whole number each dimension is divided by"
        )]
        divisor: String,

        #[arg(
            short = 'q',
            long,
            help = "Encoder quality (1-100, default: 90)",
            long_help = "Encoder quality from 1 (lowest) to 100 (highest). \
                         Used by JPEG and AVIF. For PNG: >=90 uses Zopfli, \
                         >=70 uses high compression, <70 uses standard compression."
        )]
        quality: Option<u8>,

        #[arg(long, help = "Skip the extra PNG size optimization pass")]
        no_optimize: bool,

        #[arg(
            long,
            value_enum,
            default_value_t = ResampleFilter::Lanczos3,
            help = "Resampling filter"
        )]
        filter: ResampleFilter,
    },

    #[command(
        about = "Display image information",
        long_about = "Show dimensions, format, colour type and file size, and optionally \
                      the resolution a divisor would produce."
    )]
    Info {
        #[arg(help = "Image file path to analyze")]
        input: PathBuf,

        #[arg(short = 'd', long, help = "Preview the resolution for this divisor")]
        divisor: Option<NonZeroU32>,
    },
}
