//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! The `check` view is **information-centric, not file-centric**. Each entity
//! leads with its position and label/title, with the on-disk slug shown as
//! indented `Source:` context. Build progress, on the other hand, is a plain
//! log of side effects, one line per path.
//!
//! # Output Format
//!
//! ## Build / Plan
//!
//! ```text
//! Targeting directory: docs
//! Creating directory: docs/introduction
//! Updated category: docs/introduction/_category_.json
//! Creating file: docs/introduction/overview.md
//! Exists (skipping): docs/introduction/faq.md
//!
//! Created 1 directory, 1 page; updated 1 category; skipped 1 existing page
//! ```
//!
//! A plan prefixes each line with `Would ` and never claims success.
//!
//! ## Check
//!
//! ```text
//! 001 Introduction
//!     Source: introduction/
//!     001 Overview
//!         Source: overview.md
//!     002 Who is this for?
//!         Source: who-is-this-for/
//!
//! 2 categories, 1 page
//!
//! Orphans
//!     tutorial-basics/create-a-page.md
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `String` or `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::materialize::{ScaffoldEvent, Summary};
use crate::tree::{Tree, TreeNode};
use std::path::{Path, PathBuf};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based position as 3-digit zero-padded.
fn format_index(pos: u32) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 page`, `2 pages`.
fn count(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

// ============================================================================
// Build / plan
// ============================================================================

pub fn format_target(root: &Path) -> String {
    format!("Targeting directory: {}", root.display())
}

/// One progress line per side effect.
pub fn format_event(event: &ScaffoldEvent, dry_run: bool) -> String {
    let (done, planned, path) = match event {
        ScaffoldEvent::CreatedRoot(path) => ("Creating docs root", "Would create docs root", path),
        ScaffoldEvent::CreatedDir(path) => ("Creating directory", "Would create directory", path),
        ScaffoldEvent::WroteDescriptor { path, .. } => {
            ("Updated category", "Would update category", path)
        }
        ScaffoldEvent::CreatedPage { path, .. } => ("Creating file", "Would create file", path),
        ScaffoldEvent::SkippedPage(path) => ("Exists (skipping)", "Would skip existing", path),
    };
    let verb = if dry_run { planned } else { done };
    format!("{}: {}", verb, path.display())
}

pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Created {}, {}; updated {}; skipped {}",
        count(summary.directories_created, "directory", "directories"),
        count(summary.pages_created, "page", "pages"),
        count(summary.descriptors_written, "category", "categories"),
        count(summary.pages_skipped, "existing page", "existing pages"),
    )
}

pub fn print_event(event: &ScaffoldEvent, dry_run: bool) {
    println!("{}", format_event(event, dry_run));
}

pub fn print_summary(summary: &Summary) {
    println!();
    println!("{}", format_summary(summary));
}

// ============================================================================
// Check
// ============================================================================

/// Format the declared tree with positions as they will be written.
pub fn format_tree(tree: &Tree) -> Vec<String> {
    let mut lines = Vec::new();

    for visit in tree.walk() {
        let base_indent = indent(visit.depth - 1);
        match visit.node {
            TreeNode::Category(category) => {
                lines.push(format!(
                    "{}{} {}",
                    base_indent,
                    format_index(visit.position()),
                    category.label
                ));
                lines.push(format!("{}    Source: {}/", base_indent, visit.slug));
            }
            TreeNode::Leaf { title } => {
                lines.push(format!(
                    "{}{} {}",
                    base_indent,
                    format_index(visit.position()),
                    title
                ));
                lines.push(format!("{}    Source: {}", base_indent, visit.slug));
            }
        }
    }

    let stats = tree.stats();
    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        count(stats.categories, "category", "categories"),
        count(stats.pages, "page", "pages")
    ));
    lines
}

/// Format the orphan report. Empty when there is nothing to report.
pub fn format_orphans(orphans: &[PathBuf]) -> Vec<String> {
    if orphans.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Orphans".to_string()];
    for orphan in orphans {
        lines.push(format!("    {}", orphan.display()));
    }
    lines
}

pub fn print_tree(tree: &Tree) {
    for line in format_tree(tree) {
        println!("{}", line);
    }
}

pub fn print_orphans(orphans: &[PathBuf]) {
    for line in format_orphans(orphans) {
        println!("{}", line);
    }
}
