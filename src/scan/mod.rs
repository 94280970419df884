//! Project scanner
//!
//! Walks a project directory, classifies every entry by extension and collects resource identifiers into a
//! [`Catalog`]:
//!
//! - image files, nibs and storyboards contribute their file names;
//! - storyboards are searched for screen, cell and segue identifiers;
//! - data models (`.xcdatamodeld` bundles of `.xcdatamodel` packages) are searched for entity names.
//!
//! A document that cannot be read or parsed contributes nothing. Only an unreadable scan root fails the scan.

mod classify;
mod patterns;
mod walk;

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use rigid_core::{Catalog, Category, ResourceRecord};
use rigid_markup::{PatternTable, search_file};
use thiserror::Error;

pub use classify::{EntryKind, IMAGE_EXTENSIONS, PACKAGE_EXTENSIONS, classify, is_hidden, is_package};
pub use patterns::{layout_patterns, model_patterns};
pub use walk::walk;

/// Errors that abort a scan.
#[derive(Debug, Error, Diagnostic)]
pub enum ScanError {
    #[error("cannot enumerate '{}'", path.display())]
    #[diagnostic(
        code(rigid::scan::enumerate),
        help("check that the directory containing the project file exists and is readable")
    )]
    Enumerate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The directory scanned for a given project file: its parent.
///
/// Returns `None` when the path has no parent (a filesystem root or an empty path).
pub fn scan_root_for(project_path: &Path) -> Option<&Path> {
    match project_path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Some(Path::new(".")),
        other => other,
    }
}

/// A scanned project: the identifiers found below its root.
#[derive(Debug, Clone)]
pub struct Project {
    catalog: Catalog,
}

impl Project {
    /// Scan everything below `root`.
    pub fn scan(root: &Path) -> Result<Project, ScanError> {
        let mut scanner = Scanner::new();
        scanner.scan_dir(root)?;
        tracing::debug!(root = %root.display(), records = scanner.catalog.total(), "scan complete");
        Ok(Project {
            catalog: scanner.catalog,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Traversal state: the catalog under construction and the pattern tables, built once per scan.
struct Scanner {
    catalog: Catalog,
    layout: PatternTable<Category>,
    model: PatternTable<Category>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            layout: layout_patterns(),
            model: model_patterns(),
        }
    }

    fn scan_dir(&mut self, dir: &Path) -> Result<(), ScanError> {
        for path in walk(dir)? {
            self.visit(&path);
        }
        Ok(())
    }

    fn visit(&mut self, path: &Path) {
        let kind = classify(path);
        tracing::debug!(path = %path.display(), ?kind, "classified");

        match kind {
            EntryKind::Image => {
                self.catalog.insert(Category::Images, ResourceRecord::from_file(path));
            }
            EntryKind::Nib => {
                self.catalog.insert(Category::Nibs, ResourceRecord::from_file(path));
            }
            EntryKind::Storyboard => {
                self.catalog.insert(Category::Storyboards, ResourceRecord::from_file(path));
                self.search(path, Layout::Storyboard);
            }
            EntryKind::ModelBundle => {
                if let Err(err) = self.scan_dir(path) {
                    tracing::warn!(error = %err, "skipping unreadable data model bundle");
                }
            }
            EntryKind::Model => {
                self.search(&path.join(classify::MODEL_CONTENTS), Layout::Model);
            }
            EntryKind::Ignored => {}
        }
    }

    fn search(&mut self, document: &Path, layout: Layout) {
        let patterns = match layout {
            Layout::Storyboard => &self.layout,
            Layout::Model => &self.model,
        };
        let Some(results) = search_file(document, patterns, |_, value| ResourceRecord::from_value(value)) else {
            return;
        };
        for (category, records) in results.into_inner() {
            self.catalog.get_mut(category).union(records);
        }
    }
}

/// Which pattern table a document is searched with.
#[derive(Debug, Clone, Copy)]
enum Layout {
    Storyboard,
    Model,
}
