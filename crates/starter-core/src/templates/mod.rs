//! Template catalog, template root resolution and version checks
//!
//! This module provides:
//! - Template item types (TemplateItem, ItemCatalog) and manifest loading
//! - Template root resolution (explicit path, environment variable, bundled copy)
//! - Version compatibility checking

pub mod manifest;
pub mod version;

use crate::error::{InstallError, Result};
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use manifest::{ItemCatalog, TemplateItem, MANIFEST_FILE};
pub use version::check_compatibility;

/// Resolve the template root
///
/// Precedence: explicit path, then the product's environment variable, then
/// the template bundled with the binary. The chosen directory must exist.
pub fn resolve_template_root<C: ProductConfig>(
    config: &C,
    explicit: Option<&Path>,
) -> Result<PathBuf> {
    let root = match explicit {
        Some(path) => path.to_path_buf(),
        None => match std::env::var_os(config.template_dir_env()) {
            Some(from_env) if !from_env.is_empty() => PathBuf::from(from_env),
            _ => config.bundled_template_dir(),
        },
    };
    debug!(root = %root.display(), "resolved template root");

    if !root.is_dir() {
        return Err(InstallError::TemplateRootMissing(root));
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::RunReport;
    use tempfile::tempdir;

    #[derive(Clone)]
    struct TestConfig {
        bundled: PathBuf,
    }

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "starter-test"
        }
        fn display_name(&self) -> &'static str {
            "Starter Test"
        }
        fn template_dir_env(&self) -> &'static str {
            "STARTER_CORE_TEST_TEMPLATE_DIR_UNSET"
        }
        fn bundled_template_dir(&self) -> PathBuf {
            self.bundled.clone()
        }
        fn docs_url(&self) -> &'static str {
            "https://example.invalid/docs"
        }
        fn cli_description(&self) -> &'static str {
            "test"
        }
        fn upgrade_command(&self) -> &'static str {
            "cargo install starter-test --force"
        }
        fn next_steps(&self, _dir: &Path, _report: &RunReport) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let bundled = tempdir().unwrap();
        let explicit = tempdir().unwrap();
        let config = TestConfig {
            bundled: bundled.path().to_path_buf(),
        };

        let root = resolve_template_root(&config, Some(explicit.path())).unwrap();
        assert_eq!(root, explicit.path());
    }

    #[test]
    fn test_falls_back_to_bundled() {
        let bundled = tempdir().unwrap();
        let config = TestConfig {
            bundled: bundled.path().to_path_buf(),
        };

        let root = resolve_template_root(&config, None).unwrap();
        assert_eq!(root, bundled.path());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let config = TestConfig {
            bundled: dir.path().join("template"),
        };

        let err = resolve_template_root(&config, None).unwrap_err();
        assert!(matches!(err, InstallError::TemplateRootMissing(_)));
    }
}
