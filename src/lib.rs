pub mod cli;
pub mod constants;
pub mod encode;
pub mod error;
pub mod formats;
pub mod info;
pub mod logger;
pub mod output;
pub mod processing;
pub mod request;
pub mod resize;
pub mod utils;
pub mod validation;

pub use error::{CompressionError, Result};
pub use formats::{output_format_for_path, OutputFormat};
pub use info::{inspect_image, ImageInfo};
pub use processing::{
    compress, compress_from_input, compress_request, load_image, load_image_with_format,
    spawn_compression, CompressionOptions, CompressionReport,
};
pub use request::{parse_divisor, CompressionRequest};
pub use resize::{downscale, target_dimensions, ResampleFilter};
