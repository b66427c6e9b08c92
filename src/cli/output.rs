//! Manifest rendering for the supported output formats

use anyhow::Result;

use crate::manifest::Manifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML, the native manifest format
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// File name a manifest in this format is saved under
    ///
    /// YAML keeps the bare manifest name; JSON gets a `.json` extension.
    pub fn file_name(&self, manifest_name: &str) -> String {
        match self {
            OutputFormat::Yaml => manifest_name.to_string(),
            OutputFormat::Json => format!("{}.json", manifest_name),
        }
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, manifest: &Manifest) -> Result<String> {
        match self.format {
            OutputFormat::Yaml => manifest.to_yaml(),
            OutputFormat::Json => manifest.to_json().map(|mut json| {
                json.push('\n');
                json
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Code, Docs, Model, ModelPart, Package};

    fn create_test_manifest() -> Manifest {
        Manifest {
            package: Package {
                name: Some("sentiment".to_string()),
                authors: vec!["Jane Doe".to_string()],
                ..Default::default()
            },
            model: Some(Model {
                name: "model".to_string(),
                path: "model.safetensors".to_string(),
                license: Some("MIT".to_string()),
                parts: vec![ModelPart::new("config.json")],
            }),
            docs: vec![Docs::described("README.md", "Readme file")],
            code: vec![Code::new(".")],
            ..Default::default()
        }
    }

    #[test]
    fn test_yaml_format() {
        let manifest = create_test_manifest();
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format(&manifest)
            .unwrap();

        assert!(output.contains("model.safetensors"));
        assert!(output.contains("Jane Doe"));

        let parsed = Manifest::from_yaml(&output).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_json_format() {
        let manifest = create_test_manifest();
        let output = OutputFormatter::new(OutputFormat::Json)
            .format(&manifest)
            .unwrap();

        assert!(output.ends_with('\n'));
        let parsed: Manifest = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(OutputFormat::Yaml.file_name("Packfile"), "Packfile");
        assert_eq!(OutputFormat::Json.file_name("Packfile"), "Packfile.json");
    }
}
