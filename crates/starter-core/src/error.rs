//! Error types for template installation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the installation engine
///
/// Read-only scans never produce these; mutating operations (mkdir, copy)
/// return the first failure they hit without attempting any rollback.
#[derive(Debug, Error)]
pub enum InstallError {
    /// A filesystem operation failed (permission denied, disk full, ...)
    #[error("Failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed while merging a template subtree
    #[error("Failed to walk template directory {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The template manifest exists but could not be parsed
    #[error("Failed to parse template manifest {}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An optional item depends on an item that is not listed before it
    #[error("Optional item '{item}' depends on unknown item '{depends_on}'")]
    UnknownDependency { item: String, depends_on: String },

    /// The template root itself is absent
    #[error("Template directory not found: {}", .0.display())]
    TemplateRootMissing(PathBuf),
}

impl InstallError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = InstallError> = std::result::Result<T, E>;
