//! Read-only comparison of a template subtree against a target subtree

use super::files::exists;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Files of a template subtree split by whether they already exist in the target
///
/// Paths are relative to the scanned root and keep the traversal order,
/// which is pre-order but otherwise unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Present in the template, absent in the target
    pub new_files: Vec<PathBuf>,

    /// Present in both
    pub existing_files: Vec<PathBuf>,
}

impl ScanResult {
    /// Number of template files seen by the scan
    pub fn total(&self) -> usize {
        self.new_files.len() + self.existing_files.len()
    }

    pub fn has_existing(&self) -> bool {
        !self.existing_files.is_empty()
    }

    /// Append another result, re-rooting its paths under `prefix`
    pub fn extend_prefixed(&mut self, other: ScanResult, prefix: &Path) {
        self.new_files
            .extend(other.new_files.into_iter().map(|p| prefix.join(p)));
        self.existing_files
            .extend(other.existing_files.into_iter().map(|p| prefix.join(p)));
    }
}

/// Classify every file under `template` as new or existing relative to `target`
///
/// A missing template directory yields an empty result. Entries that cannot
/// be read are skipped, so a scan never fails.
pub fn scan_tree(template: &Path, target: &Path) -> ScanResult {
    let mut result = ScanResult::default();

    if !exists(template) {
        return result;
    }

    for entry in WalkDir::new(template).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable template entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(template) else {
            continue;
        };

        if exists(&target.join(relative)) {
            result.existing_files.push(relative.to_path_buf());
        } else {
            result.new_files.push(relative.to_path_buf());
        }
    }

    result
}
