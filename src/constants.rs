/// Fixed encoder quality used when the caller does not pick one.
pub const DEFAULT_QUALITY: u8 = 90;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Sources above this size are refused before decoding (100MB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

pub const OXIPNG_PRESET: u8 = 4;
pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

// 1 (slowest) ..= 10 (fastest)
pub const AVIF_SPEED: u8 = 6;

pub const TEMP_FILE_PREFIX: &str = ".img-shrink-";
pub const TEMP_FILE_SUFFIX: &str = ".tmp";
pub const WORKER_THREAD_NAME: &str = "img-shrink-worker";

// Common output message prefixes
pub const ORIGINAL_SIZE_PREFIX: &str = "📊 Original size:";
pub const COMPRESSED_SIZE_PREFIX: &str = "📈 Compressed size:";
pub const COMPRESSION_RATIO_PREFIX: &str = "🎯 Compression ratio:";
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const ERROR_PREFIX: &str = "❌";
pub const INFO_PREFIX: &str = "📋";
