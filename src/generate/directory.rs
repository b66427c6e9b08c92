//! Wholesale classification of a single subdirectory
//!
//! Only the immediate children are inspected. Nested directories land in the
//! Unknown bucket without being read, so a directory containing any
//! subdirectory never resolves to a single category.

use super::category::{classify_file_name, Category};
use super::relative_path;
use crate::fs::FileSystem;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

const DOCS_DIR_NAMES: &[&str] = &["docs"];
const CODE_DIR_NAMES: &[&str] = &["src", "pkg", "lib", "build"];

/// Why a directory could not be classified as a whole
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnresolvedReason {
    #[error("mixed content in directory; unable to determine type")]
    Mixed,

    #[error("directory should be handled as code")]
    TreatAsCode,

    #[error("failed to read directory: {0}")]
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryVerdict {
    Docs,
    Dataset,
    /// Well-known source directory, packaged as its own code entry
    Code,
    /// Directory holds model files; its paths are in `model_files`
    Model,
    Unresolved(UnresolvedReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary {
    pub verdict: DirectoryVerdict,
    /// Model candidates, relative to the scan root
    ///
    /// For a Model verdict this also carries the directory's metadata files.
    /// For an unresolved directory it still carries any model files found.
    pub model_files: Vec<String>,
}

impl DirectorySummary {
    fn resolved(verdict: DirectoryVerdict) -> Self {
        Self {
            verdict,
            model_files: Vec::new(),
        }
    }

    fn unresolved(reason: UnresolvedReason, model_files: Vec<String>) -> Self {
        Self {
            verdict: DirectoryVerdict::Unresolved(reason),
            model_files,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self.verdict, DirectoryVerdict::Unresolved(_))
    }
}

/// Directory children grouped by category, in [`Category::ALL`] order
#[derive(Debug, Default)]
struct CategoryBuckets {
    buckets: [Vec<String>; Category::COUNT],
}

impl CategoryBuckets {
    fn push(&mut self, category: Category, path: String) {
        self.buckets[category.index()].push(path);
    }

    fn take(&mut self, category: Category) -> Vec<String> {
        std::mem::take(&mut self.buckets[category.index()])
    }

    /// Non-empty categories other than Metadata
    fn active(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|category| *category != Category::Metadata)
            .filter(|category| !self.buckets[category.index()].is_empty())
            .collect()
    }
}

/// Summarizes the subdirectory `dir_name` of `root`
pub fn summarize_directory(fs: &dyn FileSystem, root: &Path, dir_name: &str) -> DirectorySummary {
    if DOCS_DIR_NAMES.contains(&dir_name) {
        debug!(dir = dir_name, "Directory interpreted as documentation");
        return DirectorySummary::resolved(DirectoryVerdict::Docs);
    }
    if CODE_DIR_NAMES.contains(&dir_name) {
        debug!(dir = dir_name, "Directory interpreted as code");
        return DirectorySummary::resolved(DirectoryVerdict::Code);
    }

    let mut entries = match fs.read_dir(&root.join(dir_name)) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = dir_name, error = %err, "Failed to read directory");
            return DirectorySummary::unresolved(
                UnresolvedReason::Unreadable(format!("{:#}", err)),
                Vec::new(),
            );
        }
    };
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let mut buckets = CategoryBuckets::default();
    let mut model_files = Vec::new();
    for entry in &entries {
        let rel_path = relative_path(dir_name, &entry.name);
        if entry.is_dir() {
            buckets.push(Category::Unknown, rel_path);
            continue;
        }
        let category = classify_file_name(&entry.name);
        trace!(path = %rel_path, category = %category, "Classified file");
        if category == Category::Model {
            model_files.push(rel_path.clone());
        }
        buckets.push(category, rel_path);
    }

    let active = buckets.active();
    if active.len() > 1 {
        debug!(dir = dir_name, categories = ?active, "Detected mixed contents within directory");
        return DirectorySummary::unresolved(UnresolvedReason::Mixed, model_files);
    }

    match active.first() {
        Some(Category::Model) => {
            debug!(dir = dir_name, "Interpreting directory as a model directory");
            model_files.extend(buckets.take(Category::Metadata));
            DirectorySummary {
                verdict: DirectoryVerdict::Model,
                model_files,
            }
        }
        Some(Category::Dataset) => {
            debug!(dir = dir_name, "Interpreting directory as a dataset directory");
            DirectorySummary::resolved(DirectoryVerdict::Dataset)
        }
        Some(Category::Docs) => {
            debug!(dir = dir_name, "Interpreting directory as a docs directory");
            DirectorySummary::resolved(DirectoryVerdict::Docs)
        }
        _ => {
            debug!(dir = dir_name, "Could not determine type for directory");
            DirectorySummary::unresolved(UnresolvedReason::TreatAsCode, model_files)
        }
    }
}
