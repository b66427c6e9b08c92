//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Metadata about a file
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size: u64,
    pub file_type: FileType,
}

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

impl FileMetadata {
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn len(&self) -> u64 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

/// Read-only view of the filesystem the generator scans
///
/// Implementations make no ordering promise for `read_dir`; callers that need a
/// stable order sort the entries themselves.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Get file/directory metadata
    fn metadata(&self, path: &Path) -> Result<FileMetadata>;

    /// Read at most `max_bytes` bytes from the start of a file
    fn read_bytes(&self, path: &Path, max_bytes: usize) -> Result<Vec<u8>>;

    /// List the immediate children of a directory
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;
}
