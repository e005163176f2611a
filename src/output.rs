use crate::constants::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use crate::error::{CompressionError, Result};
use crate::validation::parent_dir;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Writes `bytes` to `destination` atomically.
///
/// The data goes to a temp file in the destination's directory first and is
/// renamed over the destination once fully flushed. If anything fails the
/// temp file is removed when it drops, so the destination is either the
/// complete new file or untouched.
pub fn write_atomically(destination: &Path, bytes: &[u8]) -> Result<()> {
    let dir = parent_dir(destination);
    let fail = |e: std::io::Error| CompressionError::write_failure(destination, e);

    let mut temp = Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(TEMP_FILE_SUFFIX)
        .tempfile_in(&dir)
        .map_err(fail)?;

    temp.write_all(bytes).map_err(fail)?;
    temp.as_file().sync_all().map_err(fail)?;

    temp.persist(destination).map_err(|e| fail(e.error))?;
    Ok(())
}
