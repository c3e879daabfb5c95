//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface each installer binary implements to
//! configure where templates come from and how the run is presented.

use crate::install::RunReport;
use std::path::{Path, PathBuf};

/// Configuration trait for installer products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Template location (bundled directory, environment override)
/// - Documentation links
/// - Post-install instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for overriding the template directory
    fn template_dir_env(&self) -> &'static str;

    /// Template directory shipped with the binary
    fn bundled_template_dir(&self) -> PathBuf;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Generate the "next steps" instructions after installation
    fn next_steps(&self, dir: &Path, report: &RunReport) -> Vec<String>;

    /// Environment variable holding the diagnostic log filter
    fn log_env(&self) -> String {
        format!("{}_LOG", self.name().to_uppercase().replace('-', "_"))
    }
}
