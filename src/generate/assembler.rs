use super::category::{classify_file_name, Category};
use super::directory::{summarize_directory, DirectoryVerdict};
use super::error::GenerateError;
use super::model::assemble_model;
use super::GeneratorConfig;
use crate::fs::{FileSystem, RealFileSystem};
use crate::license::{LicenseClassifier, PhraseLicenseClassifier};
use crate::manifest::{Code, Dataset, Docs, Manifest, ModelPart, Package};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

const README_DESCRIPTION: &str = "Readme file";
const LICENSE_DESCRIPTION: &str = "License file";
const CATCHALL_PATH: &str = ".";

/// Accumulated state for one pass over the root directory
struct GenerationContext {
    manifest: Manifest,
    /// Subdirectories that could not be classified wholesale
    unprocessed_dirs: Vec<String>,
    model_candidates: Vec<String>,
    /// Metadata files that become model parts or datasets once the pass ends
    metadata_paths: Vec<String>,
    /// Set when a root-level file has no section of its own
    include_catchall: bool,
    detected_license: Option<String>,
}

impl GenerationContext {
    fn new(package: Option<Package>) -> Self {
        Self {
            manifest: Manifest::with_package(package.unwrap_or_default()),
            unprocessed_dirs: Vec::new(),
            model_candidates: Vec::new(),
            metadata_paths: Vec::new(),
            include_catchall: false,
            detected_license: None,
        }
    }
}

/// Generates manifests for project directories
pub struct ManifestGenerator {
    fs: Arc<dyn FileSystem>,
    license_classifier: Arc<dyn LicenseClassifier>,
    config: GeneratorConfig,
}

impl ManifestGenerator {
    pub fn new() -> Self {
        Self::with_components(
            Arc::new(RealFileSystem::new()),
            Arc::new(PhraseLicenseClassifier::new()),
        )
    }

    pub fn with_components(
        fs: Arc<dyn FileSystem>,
        license_classifier: Arc<dyn LicenseClassifier>,
    ) -> Self {
        Self {
            fs,
            license_classifier,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds a manifest describing the contents of `root`
    ///
    /// `package` seeds the package section; it is left empty when `None`.
    pub fn generate(
        &self,
        root: &Path,
        package: Option<Package>,
    ) -> Result<Manifest, GenerateError> {
        trace!(root = %root.display(), "Generating manifest");

        if !self.fs.exists(root) {
            return Err(GenerateError::RootNotFound(root.to_path_buf()));
        }
        if !self.fs.is_dir(root) {
            return Err(GenerateError::NotADirectory(root.to_path_buf()));
        }

        let mut entries = self
            .fs
            .read_dir(root)
            .map_err(|err| GenerateError::RootUnreadable {
                path: root.to_path_buf(),
                message: format!("{:#}", err),
            })?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut ctx = GenerationContext::new(package);
        for entry in &entries {
            let name = entry.file_name();
            if self.config.is_manifest_file(name) {
                trace!(file = name, "Skipping existing manifest");
                continue;
            }
            if entry.is_dir() {
                self.visit_directory(&mut ctx, root, name);
            } else {
                self.visit_file(&mut ctx, root, name);
            }
        }

        self.finish_model(&mut ctx, root)?;
        self.layout_code(&mut ctx);
        attach_license(&mut ctx.manifest, ctx.detected_license.take());

        info!(
            root = %root.display(),
            has_model = ctx.manifest.model.is_some(),
            datasets = ctx.manifest.datasets.len(),
            docs = ctx.manifest.docs.len(),
            code = ctx.manifest.code.len(),
            "Manifest generated"
        );

        Ok(ctx.manifest)
    }

    fn visit_directory(&self, ctx: &mut GenerationContext, root: &Path, name: &str) {
        let summary = summarize_directory(self.fs.as_ref(), root, name);
        ctx.model_candidates.extend(summary.model_files);

        match summary.verdict {
            DirectoryVerdict::Docs => ctx.manifest.docs.push(Docs::new(name)),
            DirectoryVerdict::Dataset => ctx.manifest.datasets.push(Dataset::new(name)),
            DirectoryVerdict::Code => ctx.manifest.code.push(Code::new(name)),
            DirectoryVerdict::Model => {}
            DirectoryVerdict::Unresolved(reason) => {
                debug!(dir = name, reason = %reason, "Failed to determine type for directory");
                ctx.unprocessed_dirs.push(name.to_string());
            }
        }
    }

    fn visit_file(&self, ctx: &mut GenerationContext, root: &Path, name: &str) {
        let lower = name.to_lowercase();
        if lower.starts_with("readme") {
            trace!(file = name, "Found readme file");
            ctx.manifest
                .docs
                .push(Docs::described(name, README_DESCRIPTION));
            return;
        }
        if lower.starts_with("license") {
            trace!(file = name, "Found license file");
            ctx.manifest
                .docs
                .push(Docs::described(name, LICENSE_DESCRIPTION));
            ctx.detected_license = self.detect_license(&root.join(name));
            return;
        }

        match classify_file_name(name) {
            Category::Model => ctx.model_candidates.push(name.to_string()),
            Category::Metadata => {
                trace!(file = name, "Detected metadata file");
                ctx.metadata_paths.push(name.to_string());
            }
            Category::Docs => ctx.manifest.docs.push(Docs::new(name)),
            Category::Dataset => ctx.manifest.datasets.push(Dataset::new(name)),
            Category::Code | Category::Unknown => {
                trace!(
                    file = name,
                    "File is either code or unknown type; adding catch-all section"
                );
                ctx.include_catchall = true;
            }
        }
    }

    fn detect_license(&self, path: &Path) -> Option<String> {
        let bytes = match self.fs.read_bytes(path, self.config.max_license_bytes) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Failed to read license file");
                warn!("Unable to determine license type");
                return None;
            }
        };

        match self.license_classifier.classify(&bytes) {
            Ok(license) => {
                trace!(license = %license, "Detected license for license file");
                Some(license)
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Error determining license type");
                warn!("Unable to determine license type");
                None
            }
        }
    }

    fn finish_model(&self, ctx: &mut GenerationContext, root: &Path) -> Result<(), GenerateError> {
        let metadata_paths = std::mem::take(&mut ctx.metadata_paths);

        if ctx.model_candidates.is_empty() {
            trace!("No model detected; adding metadata files as datasets");
            ctx.manifest
                .datasets
                .extend(metadata_paths.into_iter().map(Dataset::new));
            return Ok(());
        }

        let mut model = assemble_model(self.fs.as_ref(), root, &ctx.model_candidates)?;
        trace!("Adding metadata files as model parts");
        model
            .parts
            .extend(metadata_paths.into_iter().map(ModelPart::new));
        ctx.manifest.model = Some(model);
        Ok(())
    }

    /// Either one catch-all code entry for the root or one entry per unprocessed directory
    fn layout_code(&self, ctx: &mut GenerationContext) {
        debug!(
            unprocessed = ctx.unprocessed_dirs.len(),
            "Deciding code layout for unprocessed paths"
        );
        let unprocessed = std::mem::take(&mut ctx.unprocessed_dirs);

        if ctx.include_catchall || unprocessed.len() > self.config.catchall_dir_threshold {
            trace!("Adding catch-all code entry");
            ctx.manifest.code = vec![Code::new(CATCHALL_PATH)];
        } else {
            ctx.manifest
                .code
                .extend(unprocessed.into_iter().map(Code::new));
        }
    }
}

impl Default for ManifestGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Attaches a detected license to the most relevant section
///
/// Precedence: model, a lone dataset, a lone code entry, then the package.
/// Nothing is overwritten when no license was detected.
fn attach_license(manifest: &mut Manifest, license: Option<String>) {
    let Some(license) = license else {
        trace!("No license detected");
        return;
    };

    if let Some(model) = manifest.model.as_mut() {
        model.license = Some(license);
    } else if manifest.datasets.len() == 1 {
        manifest.datasets[0].license = Some(license);
    } else if manifest.code.len() == 1 {
        manifest.code[0].license = Some(license);
    } else {
        trace!("Unsure what license applies to; adding to package");
        manifest.package.license = Some(license);
    }
}
