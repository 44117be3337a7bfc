//! On-disk artifacts written for each tree node.
//!
//! - Categories get a `_category_.json` ([`CategoryDescriptor`]), rewritten
//!   on every run so labels and positions stay current.
//! - Leaves get a markdown page whose front matter is a [`PageDescriptor`],
//!   followed by a heading and a placeholder line. Pages are written once.
//!
//! ## Formats
//!
//! ```text
//! _category_.json                   overview.md
//! {                                 ---
//!   "label": "Introduction",        title: Overview
//!   "position": 1,                  sidebar_position: 2
//!   "link": {                       ---
//!     "type": "generated-index"
//!   }                               # Overview
//! }
//!                                   Content coming soon...
//! ```
//!
//! The JSON uses two-space indentation with no trailing newline, so the bytes
//! are stable across runs for an unchanged tree.

use serde::{Deserialize, Serialize};

/// File name of the per-directory category metadata.
pub const CATEGORY_FILE: &str = "_category_.json";

/// Body line for freshly generated pages.
pub const PLACEHOLDER: &str = "Content coming soon...";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub label: String,
    pub position: u32,
    pub link: Link,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// The category page is an auto-generated index of its children.
    GeneratedIndex,
}

impl CategoryDescriptor {
    pub fn new(label: impl Into<String>, position: u32) -> Self {
        Self {
            label: label.into(),
            position,
            link: Link {
                kind: LinkKind::GeneratedIndex,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    pub title: String,
    pub sidebar_position: u32,
}

impl PageDescriptor {
    pub fn new(title: impl Into<String>, sidebar_position: u32) -> Self {
        Self {
            title: title.into(),
            sidebar_position,
        }
    }

    /// Full page content: front matter, heading, placeholder.
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: {title}\nsidebar_position: {position}\n---\n\n# {title}\n\n{PLACEHOLDER}\n",
            title = self.title,
            position = self.sidebar_position,
        )
    }
}
