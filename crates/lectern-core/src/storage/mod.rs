mod state;

pub use state::StateFile;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/lectern[-dev]/` based on LECTERN_ENV.
///
/// Set LECTERN_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LECTERN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lectern-dev")
    } else {
        base_dir.join("lectern")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StoreError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
