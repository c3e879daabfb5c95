//! Merge-copy of a template directory into a target directory

use super::files::exists;
use crate::error::{InstallError, Result};
use std::fmt;
use std::fs;
use std::ops::{Add, AddAssign};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// File counts produced by a merge
///
/// `created + updated + skipped` always equals the number of files in the
/// merged template subtree. Directories are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeResult {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl MergeResult {
    pub fn new(created: usize, updated: usize, skipped: usize) -> Self {
        Self {
            created,
            updated,
            skipped,
        }
    }

    /// Total number of files visited
    pub fn total(&self) -> usize {
        self.created + self.updated + self.skipped
    }
}

impl Add for MergeResult {
    type Output = MergeResult;

    fn add(self, rhs: MergeResult) -> MergeResult {
        MergeResult {
            created: self.created + rhs.created,
            updated: self.updated + rhs.updated,
            skipped: self.skipped + rhs.skipped,
        }
    }
}

impl AddAssign for MergeResult {
    fn add_assign(&mut self, rhs: MergeResult) {
        *self = *self + rhs;
    }
}

impl fmt::Display for MergeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} new, {} updated, {} unchanged",
            self.created, self.updated, self.skipped
        )
    }
}

/// Merge `src` into `dest`, creating directories as needed
///
/// Each template file is created when absent, overwritten when present and
/// `overwrite` is set, and otherwise left untouched. Files that exist only in
/// `dest` are never removed. The caller checks that `src` is a directory.
///
/// The first filesystem failure is returned; files copied before it stay.
pub fn merge_dir(src: &Path, dest: &Path, overwrite: bool) -> Result<MergeResult> {
    fs::create_dir_all(dest).map_err(|e| InstallError::io("create directory", dest, e))?;

    let mut result = MergeResult::default();

    // Pre-order walk: a directory is always visited before its contents
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(|e| InstallError::Walk {
            path: src.to_path_buf(),
            source: e,
        })?;

        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| InstallError::io("create directory", &target, e))?;
            continue;
        }

        if !exists(&target) {
            fs::copy(entry.path(), &target)
                .map_err(|e| InstallError::io("copy file to", &target, e))?;
            debug!(path = %relative.display(), "created");
            result.created += 1;
        } else if overwrite {
            fs::copy(entry.path(), &target)
                .map_err(|e| InstallError::io("overwrite file", &target, e))?;
            debug!(path = %relative.display(), "updated");
            result.updated += 1;
        } else {
            debug!(path = %relative.display(), "kept existing");
            result.skipped += 1;
        }
    }

    Ok(result)
}
