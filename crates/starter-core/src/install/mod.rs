//! Template installation engine
//!
//! This module provides:
//! - Existence checks and verbatim file copies
//! - Read-only tree scanning (new vs existing files)
//! - Merge-copying of template directories with an overwrite policy
//! - Per-item orchestration and outcome classification
//! - The `RunReport` accumulator used for the final summary
//!
//! Everything here is synchronous and single-threaded.

pub mod apply;
pub mod files;
pub mod merger;
pub mod outcome;
pub mod plan;
pub mod report;
pub mod scanner;

pub use apply::{apply_item, apply_items, AppliedItem};
pub use files::{copy_file, exists, is_dir};
pub use merger::{merge_dir, MergeResult};
pub use outcome::ItemOutcome;
pub use plan::{is_selectable, resolve_overwrite, scan_items, OverwritePolicy};
pub use report::{ReportEntry, RunReport};
pub use scanner::{scan_tree, ScanResult};
