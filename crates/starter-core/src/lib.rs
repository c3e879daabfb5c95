//! Starter Core - Shared library for installing project starter templates
//!
//! This library copies a fixed set of template items (files and directories)
//! into a target project. Installation is idempotent: existing files are kept
//! unless an overwrite is requested, and nothing in the target is ever deleted.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Synchronous functions for existence checks,
//!   tree scanning and merge-copying (`install`)
//! - **Layer 2: Workflow** - Item catalog, overwrite policy resolution and the
//!   `RunReport` accumulator (`templates`, `install::plan`, `install::report`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use starter_core::{install, ItemCatalog, RunReport};
//!
//! let catalog = ItemCatalog::load(&template_root)?;
//! let scan = install::scan_items(&template_root, &target_root, &catalog.core);
//! let overwrite = install::resolve_overwrite(&scan, Some(false)).overwrite().unwrap_or(false);
//!
//! let mut report = RunReport::default();
//! install::apply_items(&template_root, &target_root, &catalog.core, overwrite, &mut report, |_| {})?;
//! println!("{}", report);
//! ```

pub mod error;
pub mod install;
pub mod logging;
pub mod product;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{InstallError, Result};
pub use install::{
    apply_item, apply_items, merge_dir, scan_tree, ItemOutcome, MergeResult, OverwritePolicy,
    RunReport, ScanResult,
};
pub use product::ProductConfig;
pub use templates::{ItemCatalog, TemplateItem};

#[cfg(feature = "tui")]
pub use tui::run;
