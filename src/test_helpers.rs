//! Shared test utilities for the docs-scaffold test suite.
//!
//! Builds trees from inline TOML, runs the materializer while capturing its
//! events, and reads the generated artifacts back.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let tree = tree_from_toml("[tree.a]\nlabel = \"A\"\n");
//! run_materialize(tmp.path(), &tree, MaterializeOptions::default()).unwrap();
//!
//! assert_eq!(read_descriptor(&tmp.path().join("a")).label, "A");
//! assert_eq!(relative_files(tmp.path()), vec!["a/_category_.json"]);
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::parse_config;
use crate::descriptor::{CATEGORY_FILE, CategoryDescriptor};
use crate::materialize::{
    MaterializeError, MaterializeOptions, ScaffoldEvent, Summary, materialize,
};
use crate::tree::Tree;

// =========================================================================
// Tree construction
// =========================================================================

/// Parse config text and convert its `[tree]`. Panics on any config error.
pub fn tree_from_toml(toml: &str) -> Tree {
    parse_config(toml)
        .and_then(|config| config.build_tree())
        .unwrap_or_else(|e| panic!("invalid test config: {e}\n{toml}"))
}

/// Run the materializer, collecting every emitted event.
pub fn run_materialize(
    root: &Path,
    tree: &Tree,
    options: MaterializeOptions,
) -> Result<(Summary, Vec<ScaffoldEvent>), MaterializeError> {
    let mut events = Vec::new();
    let summary = materialize(root, tree, options, |event| events.push(event.clone()))?;
    Ok((summary, events))
}

// =========================================================================
// Artifact readers — panic with a clear message on miss
// =========================================================================

/// Parse the `_category_.json` inside `dir`.
pub fn read_descriptor(dir: &Path) -> CategoryDescriptor {
    let path = dir.join(CATEGORY_FILE);
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&json).unwrap_or_else(|e| panic!("bad descriptor {}: {e}", path.display()))
}

pub fn read_page(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

// =========================================================================
// Tree listings
// =========================================================================

/// All files under `root`, as sorted `/`-separated relative paths.
pub fn relative_files(root: &Path) -> Vec<String> {
    snapshot(root).into_keys().collect()
}

/// Every file under `root` keyed by relative path, with its bytes.
pub fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            let bytes = std::fs::read(entry.path()).unwrap();
            (relative, bytes)
        })
        .collect()
}
