//! Manifest generation from a directory's contents
//!
//! The generator walks the immediate children of a root directory once,
//! classifying files by suffix and subdirectories wholesale, then elects the
//! primary model, decides how to package leftovers as code and attaches the
//! detected license to the most relevant section.

mod assembler;
pub mod category;
pub mod directory;
mod error;
pub mod model;

pub use assembler::ManifestGenerator;
pub use category::{classify_file_name, Category};
pub use directory::{summarize_directory, DirectorySummary, DirectoryVerdict, UnresolvedReason};
pub use error::GenerateError;
pub use model::assemble_model;

use crate::manifest::{is_manifest_file_name, DEFAULT_MANIFEST_NAMES};
use std::path::Path;

const DEFAULT_CATCHALL_DIR_THRESHOLD: usize = 5;
const DEFAULT_MAX_LICENSE_BYTES: usize = 1_048_576; // 1MB

/// Tunables for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// More unprocessed directories than this collapse into one catch-all code entry
    pub catchall_dir_threshold: usize,
    /// Upper bound on bytes read from a license file
    pub max_license_bytes: usize,
    /// Manifest file name in use, skipped alongside the default names
    pub manifest_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            catchall_dir_threshold: DEFAULT_CATCHALL_DIR_THRESHOLD,
            max_license_bytes: DEFAULT_MAX_LICENSE_BYTES,
            manifest_name: DEFAULT_MANIFEST_NAMES[0].to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Returns true for files this tool wrote itself, in either output format
    pub fn is_manifest_file(&self, file_name: &str) -> bool {
        let stem = file_name.strip_suffix(".json").unwrap_or(file_name);
        is_manifest_file_name(stem) || stem == self.manifest_name
    }
}

/// Joins a directory and a child name into a manifest path
pub(crate) fn relative_path(dir: &str, name: &str) -> String {
    Path::new(dir).join(name).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path() {
        assert_eq!(relative_path("weights", "model.bin"), "weights/model.bin");
    }

    #[test]
    fn test_manifest_file_detection() {
        let config = GeneratorConfig {
            manifest_name: "ArtifactManifest".to_string(),
            ..Default::default()
        };

        assert!(config.is_manifest_file("Packfile"));
        assert!(config.is_manifest_file("Packfile.json"));
        assert!(config.is_manifest_file(".packfile"));
        assert!(config.is_manifest_file("ArtifactManifest"));
        assert!(config.is_manifest_file("ArtifactManifest.json"));
        assert!(!config.is_manifest_file("config.json"));
        assert!(!config.is_manifest_file("Packfile.yaml"));
    }
}
