//! Init command - writes an example `deploy.yml`.

use std::fs;
use std::path::Path;

use crate::adapters::EXAMPLE_CONFIG;
use crate::domain::AppError;

/// Write the example configuration to `path`; never overwrites.
pub fn execute(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        return Err(AppError::ConfigExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, EXAMPLE_CONFIG)?;
    tracing::info!(path = %path.display(), "wrote example configuration");
    Ok(())
}
