//! Scaffold configuration module.
//!
//! Handles loading and validating `scaffold.toml`, and converting its `[tree]`
//! table into a typed [`Tree`]. Every shape check happens here, once; the
//! materializer never sees raw TOML.
//!
//! ## Configuration Options
//!
//! ```toml
//! docs_root = "docs"   # Target directory, relative to this file
//! max_depth = 16       # Deepest nesting accepted in [tree]
//!
//! [tree.introduction]
//! label = "Introduction"
//! position = 1
//!
//! [tree.introduction.items]
//! "overview.md" = "Overview"
//!
//! [tree.introduction.items.who-is-this-for]
//! label = "Who is this for?"
//!
//! [tree.introduction.items.who-is-this-for.items]
//! "integrators.md" = "Integrators"
//! ```
//!
//! ## Tree Entries
//!
//! Each key under `[tree]` (or under a category's `items`) is a slug: the
//! file or directory name that will appear on disk. Its value is either:
//!
//! - a **string**: a page, whose title is the string
//! - a **table**: a category with optional `label`, `position` and `items`
//!
//! Entries keep their declaration order, which becomes sibling order on disk.
//! Unknown keys are rejected to catch typos early.
//!
//! Slugs may not be `_category_.json`, which every category directory already
//! holds. Page titles are written unquoted into front matter, so they may not
//! contain control characters such as newlines.

use crate::descriptor::CATEGORY_FILE;
use crate::tree::{Category, Entry, Tree, TreeNode};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0} (run `docs-scaffold gen-config` to create one)")]
    Missing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Malformed tree entry {path}: expected a page title or a table, found {found}")]
    MalformedNode { path: String, found: &'static str },
    #[error("Tree entry {path} is nested {depth} levels deep (max_depth = {max})")]
    TooDeep {
        path: String,
        depth: usize,
        max: usize,
    },
}

/// Scaffold configuration loaded from `scaffold.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Target docs directory. Relative paths resolve against the config file's directory.
    pub docs_root: String,
    /// Deepest nesting level accepted in `[tree]`. Top-level entries are level 1.
    pub max_depth: usize,
    /// Raw outline. Converted to a [`Tree`] by [`ScaffoldConfig::build_tree`].
    pub tree: toml::Table,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            docs_root: "docs".to_string(),
            max_depth: 16,
            tree: toml::Table::new(),
        }
    }
}

impl ScaffoldConfig {
    /// Validate scalar settings. Tree shape is checked by [`Self::build_tree`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Validation(
                "max_depth must be at least 1".into(),
            ));
        }
        if self.docs_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "docs_root must not be empty".into(),
            ));
        }
        if self.tree.is_empty() {
            return Err(ConfigError::Validation(
                "[tree] is empty; declare at least one category".into(),
            ));
        }
        Ok(())
    }

    /// Resolve `docs_root` against the directory holding the config file.
    pub fn resolve_root(&self, config_dir: &Path) -> PathBuf {
        let root = Path::new(&self.docs_root);
        if root.is_absolute() {
            root.to_path_buf()
        } else {
            config_dir.join(root)
        }
    }

    /// Convert the raw `[tree]` table into a typed [`Tree`].
    ///
    /// Top-level entries must be categories. Nesting beyond `max_depth` is
    /// rejected before it is descended into.
    pub fn build_tree(&self) -> Result<Tree, ConfigError> {
        let entries = convert_entries(&self.tree, &[], 1, self.max_depth)?;
        for entry in &entries {
            if let TreeNode::Leaf { .. } = entry.node {
                return Err(ConfigError::Validation(format!(
                    "top-level entry {} must be a category table, not a page",
                    entry.slug
                )));
            }
        }
        Ok(Tree::new(entries))
    }
}

fn display_path(parents: &[&str], slug: &str) -> String {
    let mut parts = parents.to_vec();
    parts.push(slug);
    parts.join("/")
}

fn type_name(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "string",
        toml::Value::Integer(_) => "integer",
        toml::Value::Float(_) => "float",
        toml::Value::Boolean(_) => "boolean",
        toml::Value::Datetime(_) => "datetime",
        toml::Value::Array(_) => "array",
        toml::Value::Table(_) => "table",
    }
}

/// Slugs become path components, so they may not climb out of their parent.
fn validate_slug(parents: &[&str], slug: &str) -> Result<(), ConfigError> {
    let problem = if slug.trim().is_empty() {
        Some("must not be empty")
    } else if slug == "." || slug == ".." {
        Some("must not be `.` or `..`")
    } else if slug.contains('/') || slug.contains('\\') {
        Some("must not contain path separators")
    } else if slug == CATEGORY_FILE {
        Some("is reserved for category metadata")
    } else {
        None
    };
    match problem {
        Some(reason) => Err(ConfigError::Validation(format!(
            "slug {:?} at {} {}",
            slug,
            display_path(parents, slug),
            reason
        ))),
        None => Ok(()),
    }
}

/// Titles land unquoted in a front matter line.
fn validate_title(parents: &[&str], slug: &str, title: &str) -> Result<(), ConfigError> {
    if title.chars().any(char::is_control) {
        return Err(ConfigError::Validation(format!(
            "{}: page title {:?} must not contain control characters",
            display_path(parents, slug),
            title
        )));
    }
    Ok(())
}

fn convert_entries(
    table: &toml::Table,
    parents: &[&str],
    depth: usize,
    max_depth: usize,
) -> Result<Vec<Entry>, ConfigError> {
    let mut entries = Vec::with_capacity(table.len());
    for (slug, value) in table {
        validate_slug(parents, slug)?;
        if depth > max_depth {
            return Err(ConfigError::TooDeep {
                path: display_path(parents, slug),
                depth,
                max: max_depth,
            });
        }
        let node = match value {
            toml::Value::String(title) => {
                validate_title(parents, slug, title)?;
                TreeNode::Leaf {
                    title: title.clone(),
                }
            }
            toml::Value::Table(fields) => {
                TreeNode::Category(convert_category(fields, parents, slug, depth, max_depth)?)
            }
            other => {
                return Err(ConfigError::MalformedNode {
                    path: display_path(parents, slug),
                    found: type_name(other),
                });
            }
        };
        entries.push(Entry {
            slug: slug.clone(),
            node,
        });
    }
    Ok(entries)
}

fn convert_category(
    fields: &toml::Table,
    parents: &[&str],
    slug: &str,
    depth: usize,
    max_depth: usize,
) -> Result<Category, ConfigError> {
    let path = display_path(parents, slug);
    let mut category = Category::new(slug);

    for (key, value) in fields {
        match (key.as_str(), value) {
            ("label", toml::Value::String(label)) => category.label = label.clone(),
            ("position", toml::Value::Integer(n)) => {
                let position = u32::try_from(*n).unwrap_or(0);
                if position == 0 {
                    return Err(ConfigError::Validation(format!(
                        "{path}: position must be a positive integer, got {n}"
                    )));
                }
                category.position = Some(position);
            }
            ("items", toml::Value::Table(items)) => {
                let mut child_parents = parents.to_vec();
                child_parents.push(slug);
                category.children = convert_entries(items, &child_parents, depth + 1, max_depth)?;
            }
            ("label" | "position" | "items", other) => {
                return Err(ConfigError::Validation(format!(
                    "{path}: `{key}` has the wrong type ({})",
                    type_name(other)
                )));
            }
            _ => {
                return Err(ConfigError::Validation(format!(
                    "{path}: unknown field `{key}`, expected one of `label`, `position`, `items`"
                )));
            }
        }
    }
    Ok(category)
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<ScaffoldConfig, ConfigError> {
    let config: ScaffoldConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate the config file at `path`.
pub fn load_config(path: &Path) -> Result<ScaffoldConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Missing(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock `scaffold.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docs-scaffold configuration
# ===========================
# Declares the directory outline of a documentation site. Running
# `docs-scaffold build` creates every category directory (with its
# `_category_.json`) and every page that does not exist yet.
#
# Existing pages are never overwritten. Category metadata is rewritten on
# every run so labels and positions follow this file.

# Target docs directory. Relative paths resolve against this file's directory.
# Overridden by --root or DOCS_SCAFFOLD_ROOT.
docs_root = "docs"

# Deepest nesting accepted below. Top-level categories are level 1.
max_depth = 16

# ---------------------------------------------------------------------------
# Tree
# ---------------------------------------------------------------------------
# Keys are slugs (directory or file names). A string value is a page title; a
# table is a category with optional `label`, `position` and `items`.
#
# Top-level categories use their declared `position` (default 1). Below the
# top level, positions follow declaration order and `position` is ignored.
# Quote keys that contain dots: "overview.md" = "Overview".

[tree.introduction]
label = "Introduction"
position = 1

[tree.introduction.items]
"overview.md" = "Overview"
"context-positioning.md" = "Context & Positioning"

[tree.introduction.items.who-is-this-for]
label = "Who is this for?"

[tree.introduction.items.who-is-this-for.items]
"integrators.md" = "Integrators"
"operators.md" = "Operators"

[tree.developer-guide]
label = "Developer Guide"
position = 2

[tree.developer-guide.items]
"quick-start.md" = "Quick Start"

[tree.developer-guide.items.setup]
label = "Setup"

[tree.developer-guide.items.setup.items]
"prerequisites.md" = "Prerequisites"
"installation.md" = "Installation"

[tree.support]
label = "Support"
position = 3

[tree.support.items]
"faq.md" = "FAQ"
"troubleshooting.md" = "Troubleshooting"
"##
}
