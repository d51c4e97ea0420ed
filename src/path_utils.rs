//! Path validation and utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Validates that a path string is not empty or just whitespace
pub fn validate_path_str(path_str: &str) -> Result<(), String> {
    if path_str.trim().is_empty() {
        return Err("Path cannot be empty or contain only whitespace".to_string());
    }
    Ok(())
}

/// Safely gets the parent directory for creating directories.
/// Returns None for paths that don't need directory creation (like "snippets.json" in current dir)
pub fn safe_parent_for_creation(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Write `content` to `path`, creating missing parent directories first.
pub fn write_creating_parents(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = safe_parent_for_creation(path) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
