//! packfile - artifact manifests for ML project directories
//!
//! Given a project directory, packfile produces a manifest describing what it
//! contains: the primary model and its parts, datasets, documentation and code,
//! plus the license when one can be detected from a license file.
//!
//! # Example Usage
//!
//! ```no_run
//! use packfile::{ManifestGenerator, Package};
//! use std::path::Path;
//!
//! let generator = ManifestGenerator::new();
//! let package = Package {
//!     name: Some("sentiment".to_string()),
//!     ..Default::default()
//! };
//!
//! let manifest = generator.generate(Path::new("./my-model"), Some(package))?;
//! println!("{}", manifest.to_yaml()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Project Structure
//!
//! - [`generate`]: classification, model election and manifest assembly
//! - [`manifest`]: the manifest schema and its serialization
//! - [`license`]: license file classification
//! - [`fs`]: filesystem abstraction with real and in-memory implementations

pub mod cli;
pub mod config;
pub mod fs;
pub mod generate;
pub mod license;
pub mod manifest;
pub mod util;

pub use config::{ConfigError, PackfileConfig};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use generate::{Category, GenerateError, GeneratorConfig, ManifestGenerator};
pub use license::{LicenseClassifier, LicenseError, PhraseLicenseClassifier};
pub use manifest::{Code, Dataset, Docs, Manifest, Model, ModelPart, Package};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
