//! Applying template items to a target project

use super::files::{copy_file, exists, is_dir};
use super::merger::{merge_dir, MergeResult};
use super::outcome::ItemOutcome;
use super::report::{ReportEntry, RunReport};
use crate::error::Result;
use crate::templates::TemplateItem;
use std::path::Path;
use tracing::{debug, warn};

/// Result of applying a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedItem {
    pub outcome: ItemOutcome,

    /// File counts behind the outcome (a single file counts as one)
    pub counts: MergeResult,
}

impl AppliedItem {
    fn new(outcome: ItemOutcome, counts: MergeResult) -> Self {
        Self { outcome, counts }
    }
}

/// Apply one template item to the target root with the given overwrite policy
///
/// A missing template item is not an error: it is logged and reported as
/// `Missing` so the remaining items can still be installed. Dependencies
/// between items are the caller's concern.
pub fn apply_item(
    template_root: &Path,
    target_root: &Path,
    item: &TemplateItem,
    overwrite: bool,
) -> Result<AppliedItem> {
    let src = template_root.join(&item.source);
    let dest = target_root.join(item.destination());

    if !exists(&src) {
        warn!(item = %item.source, "template item missing");
        return Ok(AppliedItem::new(
            ItemOutcome::Missing,
            MergeResult::default(),
        ));
    }

    if is_dir(&src) {
        let counts = merge_dir(&src, &dest, overwrite)?;
        debug!(item = %item.source, %counts, "merged directory");
        return Ok(AppliedItem::new(ItemOutcome::from_merge(&counts), counts));
    }

    let applied = if !exists(&dest) {
        copy_file(&src, &dest)?;
        AppliedItem::new(ItemOutcome::Created, MergeResult::new(1, 0, 0))
    } else if overwrite {
        copy_file(&src, &dest)?;
        AppliedItem::new(ItemOutcome::Updated, MergeResult::new(0, 1, 0))
    } else {
        AppliedItem::new(ItemOutcome::Skipped, MergeResult::new(0, 0, 1))
    };
    debug!(item = %item.source, outcome = %applied.outcome, "applied file");

    Ok(applied)
}

/// Apply items in order, recording each outcome in `report`
///
/// `on_applied` is called right after each item so callers can report
/// progress as it happens. The first failure stops the run; items applied
/// before it keep their effects and stay in the report.
pub fn apply_items<F>(
    template_root: &Path,
    target_root: &Path,
    items: &[TemplateItem],
    overwrite: bool,
    report: &mut RunReport,
    mut on_applied: F,
) -> Result<()>
where
    F: FnMut(&ReportEntry),
{
    for item in items {
        let applied = apply_item(template_root, target_root, item, overwrite)?;
        on_applied(report.push(item, applied));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_source_is_reported_not_raised() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();

        let applied = apply_item(
            template.path(),
            target.path(),
            &TemplateItem::new("LICENSE", "LICENSE file"),
            true,
        )
        .unwrap();

        assert_eq!(applied.outcome, ItemOutcome::Missing);
        assert_eq!(applied.counts.total(), 0);
        assert!(!target.path().join("LICENSE").exists());
    }

    #[test]
    fn test_single_file_lifecycle() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();
        fs::write(template.path().join("LICENSE"), "MIT").unwrap();
        let item = TemplateItem::new("LICENSE", "LICENSE file");

        let first = apply_item(template.path(), target.path(), &item, false).unwrap();
        assert_eq!(first.outcome, ItemOutcome::Created);

        fs::write(target.path().join("LICENSE"), "Apache").unwrap();
        let second = apply_item(template.path(), target.path(), &item, false).unwrap();
        assert_eq!(second.outcome, ItemOutcome::Skipped);
        assert_eq!(
            fs::read_to_string(target.path().join("LICENSE")).unwrap(),
            "Apache"
        );

        let third = apply_item(template.path(), target.path(), &item, true).unwrap();
        assert_eq!(third.outcome, ItemOutcome::Updated);
        assert_eq!(
            fs::read_to_string(target.path().join("LICENSE")).unwrap(),
            "MIT"
        );
    }

    #[test]
    fn test_file_with_destination_creates_parents() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();
        fs::create_dir_all(template.path().join("optional")).unwrap();
        fs::write(template.path().join("optional/frontend-react.md"), "agent").unwrap();

        let item = TemplateItem::new("optional/frontend-react.md", "Frontend agent")
            .with_dest(".claude/agents/frontend-react.md");
        let applied = apply_item(template.path(), target.path(), &item, false).unwrap();

        assert_eq!(applied.outcome, ItemOutcome::Created);
        assert_eq!(
            fs::read_to_string(target.path().join(".claude/agents/frontend-react.md")).unwrap(),
            "agent"
        );
    }

    #[test]
    fn test_apply_items_continues_past_missing_and_reports_in_order() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();
        fs::write(template.path().join("CLAUDE.md"), "prefs").unwrap();

        let items = vec![
            TemplateItem::new("docs", "docs/ folder structure"),
            TemplateItem::new("CLAUDE.md", "CLAUDE.md project preferences"),
        ];
        let mut report = RunReport::default();
        let mut seen = Vec::new();
        apply_items(
            template.path(),
            target.path(),
            &items,
            false,
            &mut report,
            |entry| seen.push(entry.outcome),
        )
        .unwrap();

        assert_eq!(seen, vec![ItemOutcome::Missing, ItemOutcome::Created]);
        assert_eq!(report.entries().len(), 2);
    }
}
