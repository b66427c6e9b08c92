//! Artifact manifest data model

pub mod schema;

pub use schema::{Code, Dataset, Docs, Manifest, Model, ModelPart, Package, MANIFEST_VERSION};

/// File names treated as an existing manifest when scanning a directory
pub const DEFAULT_MANIFEST_NAMES: &[&str] = &["Packfile", "packfile", ".packfile"];

/// Returns true if `file_name` is one of the recognised manifest file names
pub fn is_manifest_file_name(file_name: &str) -> bool {
    DEFAULT_MANIFEST_NAMES.contains(&file_name)
}
