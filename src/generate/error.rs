use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort manifest generation
///
/// Everything else (unreadable subdirectories, mixed directories, license
/// detection failures) is recovered from locally and only logged.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error reading directory {}: {message}", .path.display())]
    RootUnreadable { path: PathBuf, message: String },

    #[error("Failed to add model to manifest: failed to process file {}: {message}", .path.display())]
    ModelStat { path: PathBuf, message: String },

    #[error("Failed to add model to manifest: no model candidates")]
    EmptyModelCandidates,
}
