use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::ConvertError;

/// Resolve a user-supplied path to an absolute one. Relative paths are
/// resolved against the current working directory.
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Read and parse a JSON file. A missing file and malformed JSON surface as
/// distinct errors.
pub fn load_json(path: &Path) -> Result<Value, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Serialize `value` with 2-space indentation and write it to `path`,
/// creating intermediate directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ConvertError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}
