use anyhow::Result;
use clap::Parser;
use img_shrink::cli::{Args, Commands};
use img_shrink::info::{inspect_image, print_image_info};
use img_shrink::logger;
use img_shrink::processing::{compress_from_input, CompressionOptions};
use img_shrink::utils::print_compression_result;
use img_shrink::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::configure(args.quiet, args.verbose);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Compress {
            input,
            output,
            divisor,
            quality,
            no_optimize,
            filter,
        } => {
            let options = CompressionOptions::new(quality, Some(!no_optimize), Some(filter))?;

            info!("🗜️  Compressing image: {}", input);
            info!("📁 Output: {}", output);

            let report = compress_from_input(&input, &divisor, &output, &options)?;
            print_compression_result(&report);
        }
        Commands::Info { input, divisor } => {
            info!("📋 Getting info for: {:?}", input);
            let image_info = inspect_image(&input)?;
            print_image_info(&image_info, divisor);
        }
    }

    Ok(())
}
