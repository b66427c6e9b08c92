//! Packfile schema data structures
//!
//! A manifest describes the contents of a packaged ML project as typed
//! sections. Every path is relative to the directory the manifest sits in.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Schema version written into every generated manifest
pub const MANIFEST_VERSION: &str = "1.0.0";

fn default_version() -> String {
    MANIFEST_VERSION.to_string()
}

/// Root manifest structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default = "default_version")]
    pub manifest_version: String,
    #[serde(default, skip_serializing_if = "Package::is_empty")]
    pub package: Package,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasets: Vec<Dataset>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<Docs>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<Code>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            manifest_version: default_version(),
            package: Package::default(),
            model: None,
            datasets: Vec::new(),
            docs: Vec::new(),
            code: Vec::new(),
        }
    }
}

impl Manifest {
    pub fn with_package(package: Package) -> Self {
        Self {
            package,
            ..Default::default()
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize manifest to YAML")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest to JSON")
    }

    pub fn from_yaml(input: &str) -> Result<Self> {
        serde_yaml::from_str(input).context("Failed to parse manifest YAML")
    }
}

/// Package-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Package {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.authors.is_empty()
            && self.license.is_none()
    }
}

/// The primary model and its constituent parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<ModelPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPart {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docs {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl ModelPart {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Dataset {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            license: None,
        }
    }
}

impl Docs {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: None,
        }
    }

    pub fn described(path: impl Into<String>, description: &str) -> Self {
        Self {
            path: path.into(),
            description: Some(description.to_string()),
        }
    }
}

impl Code {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            license: None,
        }
    }
}
