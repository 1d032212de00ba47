//! Filename and folder-path validation for the folder store.
//!
//! Valid filenames:
//! - Must be non-empty
//! - Must not contain `/`, control characters, or `:`, `*`, `?`, `"`, `<`,
//!   `>`, `|`, `\`
//! - Must not be `.` or `..`, and must not start with `.`
//!
//! Valid folder paths:
//! - Must start with `/`; `/` alone names the root
//! - Must not end with `/` (except the root) or contain `//`
//! - Every component must be a valid filename

use crate::error::{StoreError, StoreResult};

/// Characters that are forbidden anywhere in a filename.
const FORBIDDEN_CHARS: &[char] = &['/', ':', '*', '?', '"', '<', '>', '|', '\\'];

/// Validate an entry filename, returning `Ok(())` if valid.
pub fn validate_filename(name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
            reason: "filename must not be empty".into(),
        });
    }

    if name == "." || name == ".." || name.starts_with('.') {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
            reason: "filename must not start with '.'".into(),
        });
    }

    for ch in FORBIDDEN_CHARS {
        if name.contains(*ch) {
            return Err(StoreError::InvalidName {
                name: name.to_string(),
                reason: format!("contains forbidden character: {ch:?}"),
            });
        }
    }

    if name.chars().any(|c| c.is_control()) {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
            reason: "contains control character".into(),
        });
    }

    Ok(())
}

/// Validate an absolute folder path, returning `Ok(())` if valid.
pub fn validate_folder_path(path: &str) -> StoreResult<()> {
    if !path.starts_with('/') {
        return Err(StoreError::InvalidFolderPath {
            path: path.to_string(),
            reason: "folder path must start with '/'".into(),
        });
    }

    // The root folder is always valid.
    if path == "/" {
        return Ok(());
    }

    if path.ends_with('/') {
        return Err(StoreError::InvalidFolderPath {
            path: path.to_string(),
            reason: "folder path must not end with '/'".into(),
        });
    }

    if path.contains("//") {
        return Err(StoreError::InvalidFolderPath {
            path: path.to_string(),
            reason: "must not contain consecutive slashes '//'".into(),
        });
    }

    for component in path[1..].split('/') {
        validate_filename(component).map_err(|_| StoreError::InvalidFolderPath {
            path: path.to_string(),
            reason: format!("invalid path component: {component:?}"),
        })?;
    }

    Ok(())
}
