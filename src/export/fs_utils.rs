// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` is set → Ok
/// - file exists and `force == false` → error (input may come from stdin,
///   so there is no interactive prompt)
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if force {
        info(format!("Overwriting existing file '{}'.", path.display()));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "the file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
