//! Election of the primary model file among candidates
//!
//! Two layouts are common: one large model file next to small adapters or
//! configs, and one model sharded into similarly sized chunks. A file is only
//! elected by size when it is clearly larger than the rest; otherwise the
//! first candidate in discovery order is primary.

use super::error::GenerateError;
use crate::fs::FileSystem;
use crate::manifest::{Model, ModelPart};
use std::path::Path;
use tracing::debug;

/// Builds the model section from candidate paths relative to `root`
pub fn assemble_model(
    fs: &dyn FileSystem,
    root: &Path,
    candidates: &[String],
) -> Result<Model, GenerateError> {
    let primary_index = match candidates.len() {
        0 => return Err(GenerateError::EmptyModelCandidates),
        1 => 0,
        _ => elect_by_size(fs, root, candidates)?,
    };

    let primary = &candidates[primary_index];
    let parts = candidates
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != primary_index)
        .map(|(_, path)| ModelPart::new(path.clone()))
        .collect();

    Ok(Model {
        name: display_name(primary),
        path: primary.clone(),
        license: None,
        parts,
    })
}

/// Index of the primary candidate
///
/// The largest file wins only if it exceeds 1.5x the mean size. Ties between
/// equally large files go to the first one encountered.
fn elect_by_size(
    fs: &dyn FileSystem,
    root: &Path,
    candidates: &[String],
) -> Result<usize, GenerateError> {
    let mut largest_index = 0;
    let mut largest_size = 0u64;
    let mut total_size = 0u64;

    for (index, candidate) in candidates.iter().enumerate() {
        let path = root.join(candidate);
        let size = fs
            .metadata(&path)
            .map_err(|err| GenerateError::ModelStat {
                path: path.clone(),
                message: format!("{:#}", err),
            })?
            .len();
        if size > largest_size {
            largest_size = size;
            largest_index = index;
        }
        total_size = total_size.saturating_add(size);
    }

    // Integer division; at most a byte of drift
    let average_size = total_size / candidates.len() as u64;
    let threshold = average_size + average_size / 2;

    if largest_size > threshold {
        debug!(
            primary = %candidates[largest_index],
            largest_size,
            average_size,
            "Largest candidate dominates; using it as the model"
        );
        Ok(largest_index)
    } else {
        debug!(
            primary = %candidates[0],
            largest_size,
            average_size,
            "No dominant candidate; using the first as the model"
        );
        Ok(0)
    }
}

/// File name of `path` with its final extension removed
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
