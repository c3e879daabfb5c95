//! Charm-style CLI prompts using cliclack

use crate::install::{self, ItemOutcome, OverwritePolicy, ReportEntry, RunReport, ScanResult};
use crate::product::ProductConfig;
use crate::templates::{self, version, ItemCatalog, TemplateItem};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Existing files listed individually before the overwrite prompt
const MAX_LISTED_FILES: usize = 10;

/// CLI arguments for the install command
#[derive(Debug, Clone, Default)]
pub struct InstallArgs {
    /// Local directory to use for templates instead of the bundled copy
    pub template_dir: Option<PathBuf>,

    /// Project directory to install into (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Overwrite existing files with the template versions
    pub force: bool,

    /// Optional items to install; skips the optional item prompts
    pub with: Option<Vec<String>>,

    /// Optional items never to install
    pub without: Vec<String>,

    /// Only report what would change
    pub dry_run: bool,
}

/// Run the installer with interactive prompts
///
/// Every question is asked before the first file is written, so cancelling
/// a prompt leaves the target untouched.
pub fn run<C: ProductConfig>(config: &C, args: InstallArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Locate templates and load the item catalog
    let template_root = setup_template_root(config, &args)?;
    let catalog = ItemCatalog::load(&template_root)
        .with_context(|| format!("Failed to load templates from {}", template_root.display()))?;

    if let Some(template_version) = &catalog.version {
        if let Some(warning) =
            version::check_compatibility(cli_version, template_version, config.upgrade_command())
        {
            cliclack::log::warning(format!(
                "Version warning: {}",
                warning.lines().next().unwrap_or(&warning)
            ))?;
        }
    }

    // Step 2: Select the target directory
    let target_root = select_directory(&args)?;

    // Step 3: Scan core items
    let scan = scan_core_items(&template_root, &target_root, &catalog)?;

    if args.dry_run {
        print_dry_run(&scan)?;
        cliclack::outro("Dry run complete, no files were changed.")?;
        return Ok(());
    }

    // Step 4: Resolve the overwrite policy for core items
    let overwrite = resolve_core_overwrite(&scan, &args)?;

    // Step 5: Select optional items and their overwrite decisions
    let optional = select_optional_items(&catalog, &args)?;
    let optional = resolve_optional_overwrites(&target_root, optional, &args)?;

    // Step 6: Install
    let report = install_items(&template_root, &target_root, &catalog, overwrite, &optional)?;

    // Step 7: Summary and next steps
    print_summary(&report);
    print_next_steps(config, &target_root, &report)?;

    Ok(())
}

fn setup_template_root<C: ProductConfig>(config: &C, args: &InstallArgs) -> Result<PathBuf> {
    let root = match templates::resolve_template_root(config, args.template_dir.as_deref()) {
        Ok(root) => root,
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Template directory not found. Package may be corrupted.");
        }
    };

    if args.template_dir.is_some() {
        cliclack::log::info(format!("Using local templates from {}", root.display()))?;
    }

    Ok(root)
}

fn select_directory(args: &InstallArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to read the current directory")?;

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }

    cliclack::log::info(format!("Installing into {}", path.display()))?;
    Ok(path)
}

fn scan_core_items(
    template_root: &Path,
    target_root: &Path,
    catalog: &ItemCatalog,
) -> Result<ScanResult> {
    let spinner = cliclack::spinner();
    spinner.start("Checking existing files...");

    let scan = install::scan_items(template_root, target_root, &catalog.core);

    spinner.stop(format!(
        "Found {} new, {} existing file(s)",
        scan.new_files.len(),
        scan.existing_files.len()
    ));

    Ok(scan)
}

fn print_dry_run(scan: &ScanResult) -> Result<()> {
    for path in &scan.new_files {
        cliclack::log::remark(format!("new       {}", path.display()))?;
    }
    for path in &scan.existing_files {
        cliclack::log::remark(format!("existing  {}", path.display()))?;
    }
    Ok(())
}

fn resolve_core_overwrite(scan: &ScanResult, args: &InstallArgs) -> Result<bool> {
    let requested = if args.force {
        Some(true)
    } else if args.yes {
        Some(false)
    } else {
        None
    };

    let policy = install::resolve_overwrite(scan, requested);
    if let Some(overwrite) = policy.overwrite() {
        if policy == OverwritePolicy::Overwrite {
            cliclack::log::info("Existing files will be overwritten (--force)")?;
        }
        return Ok(overwrite);
    }

    if scan.existing_files.len() <= MAX_LISTED_FILES {
        let listing: Vec<String> = scan
            .existing_files
            .iter()
            .map(|p| format!("  {}", p.display()))
            .collect();
        cliclack::log::warning(format!("Already present:\n{}", listing.join("\n")))?;
    }

    let overwrite: bool = cliclack::confirm(format!(
        "Overwrite {} existing file(s) with the template versions?",
        scan.existing_files.len()
    ))
    .initial_value(false)
    .interact()?;

    Ok(overwrite)
}

fn select_optional_items<'a>(
    catalog: &'a ItemCatalog,
    args: &InstallArgs,
) -> Result<Vec<&'a TemplateItem>> {
    if let Some(requested) = &args.with {
        for id in requested {
            if catalog.optional_item(id).is_none() {
                cliclack::log::warning(format!("Unknown optional item: {}", id))?;
            }
        }
    }

    let mut selected: Vec<&TemplateItem> = Vec::new();
    let mut selected_ids: Vec<&str> = Vec::new();

    for item in &catalog.optional {
        if !install::is_selectable(item, &selected_ids) {
            continue;
        }

        let id = item.id();
        let include = if args.without.iter().any(|w| w == id) {
            false
        } else if let Some(requested) = &args.with {
            requested.iter().any(|w| w == id)
        } else if args.yes {
            true
        } else {
            cliclack::confirm(format!("Add {}?", item.label))
                .initial_value(false)
                .interact()?
        };

        if include {
            selected.push(item);
            selected_ids.push(id);
        }
    }

    Ok(selected)
}

fn resolve_optional_overwrites<'a>(
    target_root: &Path,
    items: Vec<&'a TemplateItem>,
    args: &InstallArgs,
) -> Result<Vec<(&'a TemplateItem, bool)>> {
    let mut resolved = Vec::with_capacity(items.len());

    for item in items {
        let overwrite = if !install::exists(&target_root.join(item.destination())) {
            false
        } else if args.force || args.yes {
            args.force
        } else {
            cliclack::confirm(format!(
                "{} already exists. Overwrite it?",
                item.destination()
            ))
            .initial_value(false)
            .interact()?
        };
        resolved.push((item, overwrite));
    }

    Ok(resolved)
}

fn install_items(
    template_root: &Path,
    target_root: &Path,
    catalog: &ItemCatalog,
    overwrite: bool,
    optional: &[(&TemplateItem, bool)],
) -> Result<RunReport> {
    let mut report = RunReport::default();

    let result = install::apply_items(
        template_root,
        target_root,
        &catalog.core,
        overwrite,
        &mut report,
        log_outcome,
    )
    .and_then(|_| {
        optional.iter().try_for_each(|(item, overwrite)| {
            install::apply_items(
                template_root,
                target_root,
                std::slice::from_ref(*item),
                *overwrite,
                &mut report,
                log_outcome,
            )
        })
    });

    if let Err(e) = result {
        cliclack::log::error(format!("{:#}", anyhow::Error::from(e)))?;
        anyhow::bail!(
            "Installation stopped after {} item(s). Re-run to finish; completed items will be kept.",
            report.entries().len()
        );
    }

    Ok(report)
}

fn log_outcome(entry: &ReportEntry) {
    let dest = &entry.destination;
    let counts = &entry.counts;
    let rendered = match entry.outcome {
        ItemOutcome::Created if counts.total() > 1 => {
            cliclack::log::success(format!("Created: {} ({} files)", dest, counts.created))
        }
        ItemOutcome::Created => cliclack::log::success(format!("Created: {}", dest)),
        ItemOutcome::Merged | ItemOutcome::Updated if counts.total() > 1 => {
            cliclack::log::success(format!("{}: {} ({})", capitalize(entry.outcome), dest, counts))
        }
        ItemOutcome::Merged | ItemOutcome::Updated => {
            cliclack::log::success(format!("{}: {}", capitalize(entry.outcome), dest))
        }
        ItemOutcome::Skipped => {
            cliclack::log::info(format!("Kept: {} (already exists)", dest))
        }
        ItemOutcome::Missing => {
            cliclack::log::warning(format!("Template missing: {}", dest))
        }
    };
    if let Err(e) = rendered {
        debug!(error = %e, item = %dest, "failed to render item outcome");
    }
}

fn capitalize(outcome: ItemOutcome) -> String {
    let name = outcome.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn print_summary(report: &RunReport) {
    println!();

    let section = |title: &str, entries: Vec<&ReportEntry>| {
        if entries.is_empty() {
            return;
        }
        println!("  {}", title.bold());
        for entry in entries {
            println!("    {} {}", "-".dimmed(), entry.label);
        }
        println!();
    };

    section("Created", report.created());
    section("Updated", report.updated());
    section("Kept", report.kept());

    let missing = report.missing();
    if !missing.is_empty() {
        println!(
            "  {} {} item(s) missing from the template",
            "Warning:".yellow(),
            missing.len()
        );
        println!();
    }

    if report.is_noop() {
        println!("  {}", "All items already exist. Nothing to change.".cyan());
    } else {
        println!("  {} {}", "Done!".green().bold(), report);
    }
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    target_root: &Path,
    report: &RunReport,
) -> Result<()> {
    let steps = config.next_steps(target_root, report);

    if !steps.is_empty() {
        println!();
        println!("  Next steps");
        println!();

        for (i, step) in steps.iter().enumerate() {
            println!("  {}.  {}", i + 1, step);
        }
    }

    cliclack::outro(format!("Docs: {}", config.docs_url()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::MergeResult;

    #[test]
    fn test_capitalize_outcome() {
        assert_eq!(capitalize(ItemOutcome::Merged), "Merged");
        assert_eq!(capitalize(ItemOutcome::Updated), "Updated");
    }

    #[test]
    fn test_log_outcome_renders_every_outcome() {
        for (outcome, counts) in [
            (ItemOutcome::Created, MergeResult::new(3, 0, 0)),
            (ItemOutcome::Created, MergeResult::new(1, 0, 0)),
            (ItemOutcome::Merged, MergeResult::new(1, 0, 1)),
            (ItemOutcome::Updated, MergeResult::new(0, 1, 0)),
            (ItemOutcome::Skipped, MergeResult::new(0, 0, 1)),
            (ItemOutcome::Missing, MergeResult::default()),
        ] {
            log_outcome(&ReportEntry {
                label: "docs/ folder structure".to_string(),
                destination: "docs".to_string(),
                outcome,
                counts,
            });
        }
    }

    #[test]
    fn test_optional_selection_with_flags_respects_dependencies() {
        let catalog = ItemCatalog::default();

        let args = InstallArgs {
            with: Some(vec!["design-system".to_string()]),
            ..InstallArgs::default()
        };
        let ids: Vec<&str> = select_optional_items(&catalog, &args)
            .unwrap()
            .into_iter()
            .map(|i| i.id())
            .collect();
        // design-system is gated on frontend-react
        assert!(ids.is_empty());

        let args = InstallArgs {
            yes: true,
            without: vec!["backend-springboot".to_string()],
            ..InstallArgs::default()
        };
        let ids: Vec<&str> = select_optional_items(&catalog, &args)
            .unwrap()
            .into_iter()
            .map(|i| i.id())
            .collect();
        assert_eq!(ids, vec!["frontend-react", "design-system"]);
    }
}
