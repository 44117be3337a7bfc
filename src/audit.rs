//! Drift between the declared tree and what is on disk.
//!
//! Pages are never deleted, so renaming or removing a leaf in the config
//! leaves the old file behind. [`find_orphans`] lists markdown files under the
//! docs root that the tree no longer declares. The report is advisory; nothing
//! here modifies the filesystem.

use crate::tree::Tree;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext))
}

/// Root-relative paths of markdown files under `root` not declared by `tree`.
///
/// Returns an empty list when `root` does not exist. Results are sorted.
pub fn find_orphans(root: &Path, tree: &Tree) -> Result<Vec<PathBuf>, walkdir::Error> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }
    let declared: HashSet<PathBuf> = tree.page_paths().into_iter().collect();

    let mut orphans = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_page(entry.path()) {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            if !declared.contains(relative) {
                orphans.push(relative.to_path_buf());
            }
        }
    }
    Ok(orphans)
}
