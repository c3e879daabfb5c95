//! ai-coding-starter - Installs Claude Code project configuration into a project

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use starter_core::logging::init_logging;
use starter_core::tui::InstallArgs;
use starter_core::{ProductConfig, RunReport};
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Template directory name shipped next to an installed binary
const TEMPLATE_DIR_NAME: &str = "template";

/// ai-coding-starter product configuration
#[derive(Clone)]
pub struct StarterConfig;

impl ProductConfig for StarterConfig {
    fn name(&self) -> &'static str {
        "ai-coding-starter"
    }

    fn display_name(&self) -> &'static str {
        "ai-coding-starter"
    }

    fn template_dir_env(&self) -> &'static str {
        "AI_CODING_STARTER_TEMPLATE_DIR"
    }

    fn bundled_template_dir(&self) -> PathBuf {
        let beside_binary = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_DIR_NAME)));

        match beside_binary {
            Some(dir) if dir.is_dir() => dir,
            _ => Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("../..")
                .join(TEMPLATE_DIR_NAME),
        }
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/roelandhofkens/ai-coding-starter-template"
    }

    fn cli_description(&self) -> &'static str {
        "Initialize a project with Claude Code configurations for AI-assisted development workflows"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install ai-coding-starter --force"
    }

    fn next_steps(&self, dir: &Path, report: &RunReport) -> Vec<String> {
        let mut steps = Vec::new();
        if report.is_noop() {
            return steps;
        }

        // cd to directory if not current
        let current = std::env::current_dir().ok();
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        steps.push(
            "Review and customize .claude/settings.local.example.json\n\
                  Rename it to settings.local.json after customization"
                .to_string(),
        );
        steps.push("Update CLAUDE.md with project-specific preferences".to_string());
        steps.push("Start coding with Claude!".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "ai-coding-starter")]
#[command(version)]
pub struct Args {
    /// Local directory to use for templates instead of the bundled copy (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Project directory to install into (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode); keeps existing files unless --force
    #[arg(short, long)]
    pub yes: bool,

    /// Overwrite existing files with the template versions
    #[arg(short, long)]
    pub force: bool,

    /// Optional items to install (comma-separated: frontend-react,backend-springboot,design-system)
    #[arg(short, long, value_delimiter = ',')]
    pub with: Option<Vec<String>>,

    /// Optional items to leave out (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub without: Vec<String>,

    /// Show which files are new or already present without changing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print per-file diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Build the clap command with the product's description as help text
fn build_command<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command().about(config.cli_description())
}

impl From<Args> for InstallArgs {
    fn from(args: Args) -> Self {
        InstallArgs {
            template_dir: args.template_dir,
            directory: args.directory,
            yes: args.yes,
            force: args.force,
            with: args.with,
            without: args.without,
            dry_run: args.dry_run,
        }
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = StarterConfig;
    let matches = build_command(&config).get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(&config.log_env(), args.verbose);

    let result = starter_core::run(&config, args.into(), CLI_VERSION);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
