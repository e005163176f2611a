use crate::constants::MAX_FILE_SIZE;
use crate::error::{CompressionError, Result};
use crate::formats::{output_format_for_path, OutputFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// Validate the source file before any decoding work.
///
/// Returns the file size in bytes.
pub fn validate_source(path: &Path) -> Result<u64> {
    validate_source_within(path, MAX_FILE_SIZE)
}

pub(crate) fn validate_source_within(path: &Path, max_size: u64) -> Result<u64> {
    if !path.exists() {
        return Err(CompressionError::FileNotFound(path.to_path_buf()));
    }

    // Directories and other non-files count as missing
    if !path.is_file() {
        return Err(CompressionError::FileNotFound(path.to_path_buf()));
    }

    let metadata =
        fs::metadata(path).map_err(|_| CompressionError::FileNotFound(path.to_path_buf()))?;

    if metadata.len() > max_size {
        return Err(CompressionError::FileTooLarge(metadata.len(), max_size));
    }

    // Existence is not readability
    fs::File::open(path).map_err(|_| CompressionError::FileNotFound(path.to_path_buf()))?;

    Ok(metadata.len())
}

/// Validate the destination: a known extension and a writable parent
/// directory. Nothing is created here.
pub fn validate_destination(path: &Path) -> Result<OutputFormat> {
    let format = output_format_for_path(path)?;

    if path.is_dir() {
        return Err(CompressionError::write_failure(path, "destination is a directory"));
    }

    let parent = parent_dir(path);
    let metadata = fs::metadata(&parent).map_err(|_| {
        CompressionError::write_failure(
            path,
            format!("directory {} does not exist", parent.display()),
        )
    })?;

    if !metadata.is_dir() {
        return Err(CompressionError::write_failure(
            path,
            format!("{} is not a directory", parent.display()),
        ));
    }

    if metadata.permissions().readonly() {
        return Err(CompressionError::write_failure(
            path,
            format!("directory {} is read-only", parent.display()),
        ));
    }

    Ok(format)
}

/// Directory a destination file will live in. A bare file name lives in the
/// current directory.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
