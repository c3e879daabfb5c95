//! Pre-installation planning: scanning items and resolving the overwrite policy

use super::files::{exists, is_dir};
use super::scanner::{scan_tree, ScanResult};
use crate::templates::TemplateItem;
use std::path::{Path, PathBuf};

/// Overwrite decision for a set of items, resolved once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// No template file exists in the target yet, so there is nothing to decide
    NothingToOverwrite,
    /// Replace existing files with the template versions
    Overwrite,
    /// Keep existing files as they are
    Keep,
    /// Existing files were found and the user has to decide
    Ask,
}

impl OverwritePolicy {
    /// The overwrite flag to apply, or `None` when the user still has to be asked
    pub fn overwrite(&self) -> Option<bool> {
        match self {
            OverwritePolicy::NothingToOverwrite | OverwritePolicy::Keep => Some(false),
            OverwritePolicy::Overwrite => Some(true),
            OverwritePolicy::Ask => None,
        }
    }
}

/// Scan every item against the target, with paths relative to the target root
///
/// Directory items are scanned recursively; file items are checked directly.
/// Items missing from the template contribute nothing.
pub fn scan_items(template_root: &Path, target_root: &Path, items: &[TemplateItem]) -> ScanResult {
    let mut result = ScanResult::default();

    for item in items {
        let src = template_root.join(&item.source);
        let dest_rel = PathBuf::from(item.destination());
        let dest = target_root.join(&dest_rel);

        if !exists(&src) {
            continue;
        }

        if is_dir(&src) {
            result.extend_prefixed(scan_tree(&src, &dest), &dest_rel);
        } else if exists(&dest) {
            result.existing_files.push(dest_rel);
        } else {
            result.new_files.push(dest_rel);
        }
    }

    result
}

/// Resolve the overwrite policy from a scan and an optional explicit request
pub fn resolve_overwrite(scan: &ScanResult, requested: Option<bool>) -> OverwritePolicy {
    if !scan.has_existing() {
        return OverwritePolicy::NothingToOverwrite;
    }

    match requested {
        Some(true) => OverwritePolicy::Overwrite,
        Some(false) => OverwritePolicy::Keep,
        None => OverwritePolicy::Ask,
    }
}

/// Whether an optional item may be offered given the ids selected so far
pub fn is_selectable<S: AsRef<str>>(item: &TemplateItem, selected_ids: &[S]) -> bool {
    match &item.depends_on {
        Some(dep) => selected_ids.iter().any(|id| id.as_ref() == dep),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_items_mixes_files_and_directories() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(template.path(), ".claude/settings.json", "{}");
        write(template.path(), ".claude/commands/plan.md", "plan");
        write(template.path(), "CLAUDE.md", "prefs");
        write(target.path(), "CLAUDE.md", "mine");

        let items = vec![
            TemplateItem::new(".claude", ".claude/ folder"),
            TemplateItem::new("CLAUDE.md", "CLAUDE.md"),
            TemplateItem::new("LICENSE", "LICENSE file"),
        ];
        let scan = scan_items(template.path(), target.path(), &items);

        let new: HashSet<_> = scan.new_files.iter().cloned().collect();
        assert_eq!(
            new,
            HashSet::from([
                Path::new(".claude").join("settings.json"),
                Path::new(".claude").join("commands").join("plan.md"),
            ])
        );
        assert_eq!(scan.existing_files, vec![PathBuf::from("CLAUDE.md")]);
    }

    #[test]
    fn test_scan_items_uses_destination_paths() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(template.path(), "optional/backend-springboot.md", "agent");

        let items = vec![TemplateItem::new("optional/backend-springboot.md", "Backend agent")
            .with_dest(".claude/agents/backend-springboot.md")];
        let scan = scan_items(template.path(), target.path(), &items);

        assert_eq!(
            scan.new_files,
            vec![PathBuf::from(".claude/agents/backend-springboot.md")]
        );
    }

    #[test]
    fn test_resolve_overwrite() {
        let clean = ScanResult {
            new_files: vec![PathBuf::from("a")],
            existing_files: vec![],
        };
        let dirty = ScanResult {
            new_files: vec![],
            existing_files: vec![PathBuf::from("a")],
        };

        assert_eq!(
            resolve_overwrite(&clean, Some(true)),
            OverwritePolicy::NothingToOverwrite
        );
        assert_eq!(resolve_overwrite(&clean, None).overwrite(), Some(false));
        assert_eq!(resolve_overwrite(&dirty, Some(true)), OverwritePolicy::Overwrite);
        assert_eq!(resolve_overwrite(&dirty, Some(false)), OverwritePolicy::Keep);
        assert_eq!(resolve_overwrite(&dirty, None), OverwritePolicy::Ask);
        assert_eq!(OverwritePolicy::Ask.overwrite(), None);
    }

    #[test]
    fn test_is_selectable() {
        let frontend = TemplateItem::new("optional/frontend-react.md", "Frontend agent");
        let design = TemplateItem::new("optional/design-system.md", "Design system")
            .depends_on("frontend-react");

        let none: [&str; 0] = [];
        assert!(is_selectable(&frontend, &none));
        assert!(!is_selectable(&design, &none));
        assert!(!is_selectable(&design, &["backend-springboot"]));
        assert!(is_selectable(&design, &["frontend-react".to_string()]));
    }
}
