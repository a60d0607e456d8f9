//! Write rendered report files into the output directory.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, EXIT_CONFIG};

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|e| {
        AppError::new(
            EXIT_CONFIG,
            format!("Failed to create output directory '{}': {e}", dir.display()),
        )
    })
}

/// Write `contents` to `<dir>/<name>` and return the path written.
pub fn write_report_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, AppError> {
    let path = dir.join(name);
    let mut file = File::create(&path)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to create '{}': {e}", path.display())))?;

    file.write_all(contents.as_bytes())
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to write '{}': {e}", path.display())))?;

    Ok(path)
}
