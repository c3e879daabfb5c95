//! Filesystem primitives shared by the scanner, merger and orchestrator

use crate::error::{InstallError, Result};
use std::fs;
use std::path::Path;

/// Check whether a path is present on the filesystem (any type)
///
/// Errors while probing, including permission denied, are reported as
/// "does not exist". An inaccessible destination therefore looks like a
/// file to create, and the subsequent copy fails with a real error.
pub fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

/// Check whether a path is an accessible directory
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Copy a single file byte-for-byte, creating parent directories as needed
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| InstallError::io("create directory", parent, e))?;
    }
    fs::copy(src, dest).map_err(|e| InstallError::io("copy file to", dest, e))?;
    Ok(())
}
