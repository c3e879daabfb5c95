//! Categorical outcome of applying one template item

use super::merger::MergeResult;
use std::fmt;

/// What happened to a template item, used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemOutcome {
    /// Every file was new
    Created,
    /// Some files were new and some already existed
    Merged,
    /// Existing files were overwritten and nothing was new
    Updated,
    /// Everything already existed and was kept
    Skipped,
    /// The item is absent from the template
    Missing,
}

impl ItemOutcome {
    /// Derive the outcome of a directory merge from its counts
    ///
    /// An empty directory counts as created.
    pub fn from_merge(result: &MergeResult) -> Self {
        let MergeResult {
            created,
            updated,
            skipped,
        } = *result;

        if updated > 0 && created > 0 {
            ItemOutcome::Merged
        } else if updated > 0 {
            ItemOutcome::Updated
        } else if created > 0 && skipped > 0 {
            ItemOutcome::Merged
        } else if created > 0 {
            ItemOutcome::Created
        } else if skipped > 0 {
            ItemOutcome::Skipped
        } else {
            ItemOutcome::Created
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemOutcome::Created => "created",
            ItemOutcome::Merged => "merged",
            ItemOutcome::Updated => "updated",
            ItemOutcome::Skipped => "skipped",
            ItemOutcome::Missing => "missing",
        }
    }

    /// Whether the item wrote anything into the target
    pub fn changed_target(&self) -> bool {
        matches!(
            self,
            ItemOutcome::Created | ItemOutcome::Merged | ItemOutcome::Updated
        )
    }
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
