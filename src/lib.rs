//! # docs-scaffold
//!
//! Materializes a documentation-site directory tree from a declarative
//! outline. Categories become directories with a `_category_.json`; leaves
//! become placeholder markdown pages with front matter.
//!
//! # Pipeline
//!
//! ```text
//! 1. Load      scaffold.toml  →  ScaffoldConfig   (parse, reject unknown keys)
//! 2. Convert   [tree]         →  Tree             (typed, depth-bounded)
//! 3. Build     Tree           →  docs/            (dirs, descriptors, pages)
//! ```
//!
//! Loading and conversion do all the validation, so a tree that reaches the
//! materializer is well-formed by construction. The only failures left are
//! filesystem ones.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `scaffold.toml` loading, validation, and `[tree]` conversion |
//! | [`tree`] | `Tree`/`TreeNode` model and its stack-based pre-order walk |
//! | [`descriptor`] | `_category_.json` and page front-matter formats |
//! | [`materialize`] | The filesystem pass: create, rewrite, or skip per node |
//! | [`audit`] | Markdown files on disk that the tree no longer declares |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Pages Are Write-Once
//!
//! A page is created only when its path is free. Once someone has written real
//! content into it, no later run will touch it. Renaming a leaf in the config
//! therefore leaves the old page behind; `check` lists such files as orphans
//! rather than deleting anything.
//!
//! ## Category Metadata Is Always Rewritten
//!
//! `_category_.json` carries only a label and a position, both owned by the
//! config. Rewriting it each run keeps the sidebar in sync with the outline.
//!
//! ## Positions
//!
//! Top-level categories use their declared `position` (default 1), so the
//! outline can interleave with hand-written top-level sections. Below the top
//! level, positions always follow declaration order.
//!
//! ## Missing Docs Root Is an Error
//!
//! A typo in the root path should not scatter a fresh tree somewhere
//! unexpected. The root must exist unless `--create-root` is given, and this
//! is checked before the first write.

pub mod audit;
pub mod config;
pub mod descriptor;
pub mod materialize;
pub mod output;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_helpers;
