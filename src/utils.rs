/// Formatting helpers shared by the CLI output and the report type.
use crate::constants::{COMPRESSED_SIZE_PREFIX, COMPRESSION_RATIO_PREFIX, ORIGINAL_SIZE_PREFIX};
use crate::processing::CompressionReport;
use crate::{info, success, warn};

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Calculate compression ratio as a percentage
///
/// Positive means the output is smaller, negative means it grew.
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

pub fn print_compression_result(report: &CompressionReport) {
    let (ow, oh) = report.original_dimensions;
    let (nw, nh) = report.output_dimensions;
    let ratio = report.compression_ratio();

    info!(
        "{} {} ({}x{})",
        ORIGINAL_SIZE_PREFIX,
        format_file_size(report.original_size),
        ow,
        oh
    );
    info!(
        "{} {} ({}x{} {})",
        COMPRESSED_SIZE_PREFIX,
        format_file_size(report.output_size),
        nw,
        nh,
        report.format
    );
    info!("{} {:.1}%", COMPRESSION_RATIO_PREFIX, ratio);

    if ratio < 0.0 {
        warn!("File size increased by {:.1}%", ratio.abs());
    }
    success!("{}", report.summary());
}
