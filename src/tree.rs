//! The declarative outline of a documentation site.
//!
//! A [`Tree`] is an ordered list of top-level entries. Every entry pairs a
//! slug (the file or directory name on disk) with a [`TreeNode`]:
//!
//! - [`TreeNode::Category`] becomes a directory holding a `_category_.json`
//! - [`TreeNode::Leaf`] becomes a single markdown page
//!
//! The variant is decided once, when the config is loaded
//! ([`crate::config::ScaffoldConfig::build_tree`]). Everything downstream
//! matches on the enum instead of inspecting raw values.
//!
//! ## Positions
//!
//! Sibling order is declaration order. The position written to disk is
//! computed by [`Visit::position`]:
//!
//! ```text
//! [tree.introduction]        depth 1: declared `position`, default 1
//! position = 3
//! [tree.introduction.items]
//! "overview.md" = "Overview" depth 2+: 1-based ordinal among siblings,
//! "faq.md" = "FAQ"                     any declared `position` ignored
//! ```

use std::path::{Path, PathBuf};

/// A named node: `slug` is the path component the node materializes as.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub slug: String,
    pub node: TreeNode,
}

impl Entry {
    pub fn leaf(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            node: TreeNode::Leaf {
                title: title.into(),
            },
        }
    }

    pub fn category(slug: impl Into<String>, category: Category) -> Self {
        Self {
            slug: slug.into(),
            node: TreeNode::Category(category),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// A folder-like grouping with a display label and child entries.
    Category(Category),
    /// A generated page, identified only by its title.
    Leaf { title: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Display label for the sidebar. Falls back to the slug at load time.
    pub label: String,
    /// Declared order hint. Only honored for top-level categories.
    pub position: Option<u32>,
    pub children: Vec<Entry>,
}

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            position: None,
            children: Vec::new(),
        }
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_child(mut self, entry: Entry) -> Self {
        self.children.push(entry);
        self
    }
}

/// Counts of each node kind in a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub categories: usize,
    pub pages: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    pub entries: Vec<Entry>,
}

impl Tree {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pre-order, depth-first walk in declaration order.
    pub fn walk(&self) -> Walk<'_> {
        let mut walk = Walk { stack: Vec::new() };
        walk.push_children(Path::new(""), 1, &self.entries);
        walk
    }

    pub fn stats(&self) -> TreeStats {
        self.walk().fold(TreeStats::default(), |mut stats, visit| {
            match visit.node {
                TreeNode::Category(_) => stats.categories += 1,
                TreeNode::Leaf { .. } => stats.pages += 1,
            }
            stats
        })
    }

    /// Deepest nesting level; a tree with only top-level entries has depth 1.
    pub fn depth(&self) -> usize {
        self.walk().map(|visit| visit.depth).max().unwrap_or(0)
    }

    /// Root-relative paths of every leaf page.
    pub fn page_paths(&self) -> Vec<PathBuf> {
        self.walk()
            .filter(|visit| matches!(visit.node, TreeNode::Leaf { .. }))
            .map(|visit| visit.path)
            .collect()
    }
}

/// One node reached during a [`Tree::walk`].
#[derive(Debug, Clone)]
pub struct Visit<'a> {
    /// Path relative to the docs root, e.g. `introduction/overview.md`.
    pub path: PathBuf,
    pub slug: &'a str,
    /// 1 for top-level entries.
    pub depth: usize,
    /// 1-based index among siblings.
    pub ordinal: u32,
    pub node: &'a TreeNode,
}

impl Visit<'_> {
    /// Position written to disk for this node.
    ///
    /// Top-level categories keep their declared position (default 1).
    /// Everything below the top level is numbered by sibling ordinal.
    pub fn position(&self) -> u32 {
        match self.node {
            TreeNode::Category(category) if self.depth == 1 => category.position.unwrap_or(1),
            _ => self.ordinal,
        }
    }
}

/// Iterator behind [`Tree::walk`]. Uses an explicit stack, so arbitrarily
/// deep trees never grow the call stack.
pub struct Walk<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> Walk<'a> {
    fn push_children(&mut self, parent: &Path, depth: usize, entries: &'a [Entry]) {
        // Reversed so the first sibling is popped first.
        for (i, entry) in entries.iter().enumerate().rev() {
            self.stack.push(Visit {
                path: parent.join(&entry.slug),
                slug: &entry.slug,
                depth,
                ordinal: i as u32 + 1,
                node: &entry.node,
            });
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        if let TreeNode::Category(category) = visit.node {
            self.push_children(&visit.path, visit.depth + 1, &category.children);
        }
        Some(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        Tree::new(vec![
            Entry::category(
                "intro",
                Category::new("Introduction")
                    .with_position(4)
                    .with_child(Entry::leaf("overview.md", "Overview"))
                    .with_child(Entry::category(
                        "why",
                        Category::new("Why")
                            .with_position(9)
                            .with_child(Entry::leaf("problem.md", "Problem")),
                    )),
            ),
            Entry::category("faq", Category::new("FAQ")),
        ])
    }

    #[test]
    fn walk_is_preorder_in_declaration_order() {
        let tree = sample();
        let paths: Vec<PathBuf> = tree.walk().map(|v| v.path).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("intro"),
                PathBuf::from("intro/overview.md"),
                PathBuf::from("intro/why"),
                PathBuf::from("intro/why/problem.md"),
                PathBuf::from("faq"),
            ]
        );
    }

    #[test]
    fn walk_tracks_depth_and_ordinal() {
        let tree = sample();
        let visits: Vec<(usize, u32)> = tree.walk().map(|v| (v.depth, v.ordinal)).collect();
        assert_eq!(visits, vec![(1, 1), (2, 1), (2, 2), (3, 1), (1, 2)]);
    }

    #[test]
    fn top_level_position_is_declared() {
        let tree = sample();
        let intro = tree.walk().find(|v| v.slug == "intro").unwrap();
        assert_eq!(intro.position(), 4);
    }

    #[test]
    fn top_level_position_defaults_to_one() {
        let tree = sample();
        let faq = tree.walk().find(|v| v.slug == "faq").unwrap();
        assert_eq!(faq.ordinal, 2);
        assert_eq!(faq.position(), 1);
    }

    #[test]
    fn nested_position_ignores_declared_value() {
        let tree = sample();
        let why = tree.walk().find(|v| v.slug == "why").unwrap();
        assert_eq!(why.position(), 2);
    }

    #[test]
    fn leaf_position_is_ordinal() {
        let tree = sample();
        let problem = tree.walk().find(|v| v.slug == "problem.md").unwrap();
        assert_eq!(problem.position(), 1);
    }

    #[test]
    fn stats_counts_each_kind() {
        let stats = sample().stats();
        assert_eq!(
            stats,
            TreeStats {
                categories: 3,
                pages: 2
            }
        );
    }

    #[test]
    fn depth_of_sample() {
        assert_eq!(sample().depth(), 3);
        assert_eq!(Tree::default().depth(), 0);
    }

    #[test]
    fn page_paths_lists_leaves_only() {
        assert_eq!(
            sample().page_paths(),
            vec![
                PathBuf::from("intro/overview.md"),
                PathBuf::from("intro/why/problem.md"),
            ]
        );
    }

    #[test]
    fn deep_tree_walks_without_recursion() {
        let mut category = Category::new("bottom").with_child(Entry::leaf("page.md", "Page"));
        for i in 0..1_000 {
            category =
                Category::new(format!("level {i}")).with_child(Entry::category("d", category));
        }
        let tree = Tree::new(vec![Entry::category("top", category)]);
        assert_eq!(tree.stats().pages, 1);
        assert_eq!(tree.depth(), 1_002);
    }
}
