//! Accumulated results of one installation run

use super::apply::AppliedItem;
use super::merger::MergeResult;
use super::outcome::ItemOutcome;
use crate::templates::TemplateItem;
use std::fmt;

/// One applied item as recorded in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Human-readable item label
    pub label: String,

    /// Destination path relative to the target root
    pub destination: String,

    pub outcome: ItemOutcome,

    pub counts: MergeResult,
}

/// Outcomes of every item applied during a run, in application order
///
/// Threaded explicitly through the installer and returned to the caller.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    entries: Vec<ReportEntry>,
}

impl RunReport {
    /// Record an applied item and return the stored entry
    pub fn push(&mut self, item: &TemplateItem, applied: AppliedItem) -> &ReportEntry {
        self.entries.push(ReportEntry {
            label: item.label.clone(),
            destination: item.destination().to_string(),
            outcome: applied.outcome,
            counts: applied.counts,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    fn matching<'a, P>(&'a self, pred: P) -> Vec<&'a ReportEntry>
    where
        P: Fn(&ReportEntry) -> bool,
    {
        self.entries.iter().filter(|e| pred(*e)).collect()
    }

    /// Items that added at least one file (an empty directory counts as created)
    pub fn created(&self) -> Vec<&ReportEntry> {
        self.matching(|e| e.counts.created > 0 || e.outcome == ItemOutcome::Created)
    }

    /// Items that overwrote at least one file
    pub fn updated(&self) -> Vec<&ReportEntry> {
        self.matching(|e| e.counts.updated > 0)
    }

    /// Items that left at least one existing file untouched
    pub fn kept(&self) -> Vec<&ReportEntry> {
        self.matching(|e| e.counts.skipped > 0 || e.outcome == ItemOutcome::Skipped)
    }

    /// Items absent from the template
    pub fn missing(&self) -> Vec<&ReportEntry> {
        self.matching(|e| e.outcome == ItemOutcome::Missing)
    }

    /// File counts summed over every entry
    pub fn totals(&self) -> MergeResult {
        self.entries
            .iter()
            .fold(MergeResult::default(), |acc, e| acc + e.counts)
    }

    /// True when nothing in the target was written
    pub fn is_noop(&self) -> bool {
        !self.entries.iter().any(|e| e.outcome.changed_target())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.totals())
    }
}
