//! Template item catalog and manifest parsing

use crate::error::{InstallError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Manifest file name inside the template root
pub const MANIFEST_FILE: &str = "template.yaml";

/// A named top-level entry (file or directory) of the template tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateItem {
    /// Source path relative to the template root
    pub source: String,

    /// Destination path relative to the target root (defaults to source if not specified)
    #[serde(default)]
    pub dest: Option<String>,

    /// Human-readable label used in prompts and the summary
    pub label: String,

    /// Identifier used by `depends_on` and `--with` (defaults to the source file stem)
    #[serde(default)]
    pub id: Option<String>,

    /// Id of another optional item that must be selected for this one to be offered
    #[serde(default)]
    pub depends_on: Option<String>,
}

impl TemplateItem {
    pub fn new(source: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: None,
            label: label.into(),
            id: None,
            depends_on: None,
        }
    }

    pub fn with_dest(mut self, dest: impl Into<String>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn depends_on(mut self, id: impl Into<String>) -> Self {
        self.depends_on = Some(id.into());
        self
    }

    /// Get the destination path (falls back to source if dest not specified)
    pub fn destination(&self) -> &str {
        self.dest.as_deref().unwrap_or(&self.source)
    }

    /// Get the item id (falls back to the source file stem)
    pub fn id(&self) -> &str {
        if let Some(id) = &self.id {
            return id;
        }
        Path::new(&self.source)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.source)
    }
}

/// Items installed by the CLI (template.yaml in the template root)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCatalog {
    /// Semver version for CLI compatibility checking
    #[serde(default)]
    pub version: Option<String>,

    /// Items always installed; they share one overwrite policy
    pub core: Vec<TemplateItem>,

    /// Items installed only when selected, each with its own overwrite decision
    #[serde(default)]
    pub optional: Vec<TemplateItem>,
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self {
            version: None,
            core: vec![
                TemplateItem::new(".claude", ".claude/ folder with commands and skills"),
                TemplateItem::new("docs", "docs/ folder structure"),
                TemplateItem::new("CLAUDE.md", "CLAUDE.md project preferences"),
                TemplateItem::new("LICENSE", "LICENSE file"),
            ],
            optional: vec![
                TemplateItem::new("optional/frontend-react.md", "Frontend agent (React)")
                    .with_dest(".claude/agents/frontend-react.md"),
                TemplateItem::new("optional/backend-springboot.md", "Backend agent (Spring Boot)")
                    .with_dest(".claude/agents/backend-springboot.md"),
                TemplateItem::new("optional/design-system.md", "UI design system guidelines")
                    .with_dest("docs/guidelines/ui/design-system.md")
                    .depends_on("frontend-react"),
            ],
        }
    }
}

impl ItemCatalog {
    /// Load the catalog from the template root, falling back to the built-in layout
    pub fn load(template_root: &Path) -> Result<Self> {
        let manifest_path = template_root.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&manifest_path)
            .map_err(|e| InstallError::io("read", &manifest_path, e))?;
        let catalog: ItemCatalog =
            serde_yaml::from_str(&content).map_err(|e| InstallError::Manifest {
                path: manifest_path.clone(),
                source: e,
            })?;
        catalog.validate()?;

        Ok(catalog)
    }

    /// Check that every dependency names an optional item listed earlier
    pub fn validate(&self) -> Result<()> {
        for (idx, item) in self.optional.iter().enumerate() {
            if let Some(dep) = &item.depends_on {
                if !self.optional[..idx].iter().any(|o| o.id() == dep) {
                    return Err(InstallError::UnknownDependency {
                        item: item.id().to_string(),
                        depends_on: dep.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Find an optional item by id
    pub fn optional_item(&self, id: &str) -> Option<&TemplateItem> {
        self.optional.iter().find(|o| o.id() == id)
    }
}
