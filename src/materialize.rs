//! Tree materialization: turn a [`Tree`] into directories and files.
//!
//! One sequential, depth-first pass in declaration order:
//!
//! ```text
//! for each node (pre-order):
//!   Category → ensure directory, overwrite _category_.json
//!   Leaf     → create page if the path is free, otherwise leave it alone
//! ```
//!
//! ## Idempotence
//!
//! Re-running over an existing docs tree is the normal case. Directories that
//! exist are reused. Category descriptors are rewritten every run, producing
//! identical bytes for an unchanged tree. Pages are created with
//! `create_new`, so an edited page is never touched again.
//!
//! ## Failure
//!
//! Every error is fatal to the run and nothing is rolled back. A missing docs
//! root is detected before the first write. A page path occupied by a
//! directory, or a category path occupied by a file, stops the run instead of
//! guessing which one is wrong.
//!
//! ## Progress
//!
//! Each side effect is reported to the caller as a [`ScaffoldEvent`] as soon
//! as it happens, so partial progress is visible even when a later step fails.

use crate::descriptor::{CATEGORY_FILE, CategoryDescriptor, PageDescriptor};
use crate::tree::{Tree, TreeNode};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("Docs directory not found at {0}")]
    RootNotFound(PathBuf),
    #[error("Docs root is not a directory: {0}")]
    RootNotDirectory(PathBuf),
    #[error("Category path exists but is not a directory: {0}")]
    CategoryConflict(PathBuf),
    #[error("Page path is occupied by a directory: {0}")]
    LeafConflict(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> MaterializeError + '_ {
    move |source| MaterializeError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterializeOptions {
    /// Create the docs root if it does not exist instead of failing.
    pub create_root: bool,
    /// Walk and report without touching the filesystem.
    pub dry_run: bool,
}

/// A single side effect of a run (or, in a dry run, one that would happen).
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldEvent {
    CreatedRoot(PathBuf),
    CreatedDir(PathBuf),
    WroteDescriptor {
        path: PathBuf,
        label: String,
        position: u32,
    },
    CreatedPage {
        path: PathBuf,
        title: String,
        position: u32,
    },
    SkippedPage(PathBuf),
}

/// Totals for a run, one counter per event kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories_created: usize,
    pub descriptors_written: usize,
    pub pages_created: usize,
    pub pages_skipped: usize,
}

impl Summary {
    fn record(&mut self, event: &ScaffoldEvent) {
        match event {
            ScaffoldEvent::CreatedRoot(_) | ScaffoldEvent::CreatedDir(_) => {
                self.directories_created += 1
            }
            ScaffoldEvent::WroteDescriptor { .. } => self.descriptors_written += 1,
            ScaffoldEvent::CreatedPage { .. } => self.pages_created += 1,
            ScaffoldEvent::SkippedPage(_) => self.pages_skipped += 1,
        }
    }
}

/// Materialize `tree` under `root`.
///
/// `on_event` is called once per side effect, in walk order.
pub fn materialize<F>(
    root: &Path,
    tree: &Tree,
    options: MaterializeOptions,
    on_event: F,
) -> Result<Summary, MaterializeError>
where
    F: FnMut(&ScaffoldEvent),
{
    let mut run = Run {
        options,
        summary: Summary::default(),
        on_event,
    };

    run.ensure_root(root)?;

    for visit in tree.walk() {
        let path = root.join(&visit.path);
        let position = visit.position();
        match visit.node {
            TreeNode::Category(category) => {
                run.ensure_dir(&path)?;
                run.write_descriptor(&path, &category.label, position)?;
            }
            TreeNode::Leaf { title } => run.create_page(&path, title, position)?,
        }
    }

    Ok(run.summary)
}

struct Run<F> {
    options: MaterializeOptions,
    summary: Summary,
    on_event: F,
}

impl<F: FnMut(&ScaffoldEvent)> Run<F> {
    fn emit(&mut self, event: ScaffoldEvent) {
        self.summary.record(&event);
        (self.on_event)(&event);
    }

    fn ensure_root(&mut self, root: &Path) -> Result<(), MaterializeError> {
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(MaterializeError::RootNotDirectory(root.to_path_buf())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if !self.options.create_root {
                    return Err(MaterializeError::RootNotFound(root.to_path_buf()));
                }
                if !self.options.dry_run {
                    fs::create_dir_all(root).map_err(io_error(root))?;
                }
                self.emit(ScaffoldEvent::CreatedRoot(root.to_path_buf()));
                Ok(())
            }
            Err(e) => Err(io_error(root)(e)),
        }
    }

    fn ensure_dir(&mut self, path: &Path) -> Result<(), MaterializeError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(MaterializeError::CategoryConflict(path.to_path_buf())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if !self.options.dry_run {
                    fs::create_dir_all(path).map_err(io_error(path))?;
                }
                self.emit(ScaffoldEvent::CreatedDir(path.to_path_buf()));
                Ok(())
            }
            Err(e) => Err(io_error(path)(e)),
        }
    }

    fn write_descriptor(
        &mut self,
        dir: &Path,
        label: &str,
        position: u32,
    ) -> Result<(), MaterializeError> {
        let path = dir.join(CATEGORY_FILE);
        let json = CategoryDescriptor::new(label, position).to_json()?;
        if !self.options.dry_run {
            fs::write(&path, json).map_err(io_error(&path))?;
        }
        self.emit(ScaffoldEvent::WroteDescriptor {
            path,
            label: label.to_string(),
            position,
        });
        Ok(())
    }

    fn create_page(
        &mut self,
        path: &Path,
        title: &str,
        position: u32,
    ) -> Result<(), MaterializeError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {
                return Err(MaterializeError::LeafConflict(path.to_path_buf()));
            }
            Ok(_) => {
                self.emit(ScaffoldEvent::SkippedPage(path.to_path_buf()));
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(io_error(path)(e)),
        }

        if !self.options.dry_run {
            let content = PageDescriptor::new(title, position).render();
            let mut file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(io_error(path))?;
            file.write_all(content.as_bytes()).map_err(io_error(path))?;
        }
        self.emit(ScaffoldEvent::CreatedPage {
            path: path.to_path_buf(),
            title: title.to_string(),
            position,
        });
        Ok(())
    }
}
