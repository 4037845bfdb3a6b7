//! Capability-scoped file reads for listing snapshots and templates.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::PageError;

/// Reads a UTF-8 file through a directory capability on its parent.
///
/// `what` names the file in error messages, e.g. `"listing"`.
///
/// # Errors
///
/// Returns [`PageError::Io`] when the path has no file name or when the
/// directory or file cannot be opened or read.
pub fn read_utf8(path: &Utf8Path, what: &str) -> Result<String, PageError> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| PageError::Io {
        message: format!("invalid {what} path '{path}': no file name"),
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        PageError::Io {
            message: format!("failed to open {what} directory '{parent}': {error}"),
        }
    })?;
    dir.read_to_string(file_name).map_err(|error| PageError::Io {
        message: format!("failed to read {what} '{path}': {error}"),
    })
}
