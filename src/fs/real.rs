use super::{DirEntry, FileMetadata, FileSystem, FileType};
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::warn;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry type without following symlinks; a link is never reported as a directory
fn file_type_of(file_type: fs::FileType) -> FileType {
    if file_type.is_symlink() {
        FileType::Symlink
    } else if file_type.is_dir() {
        FileType::Directory
    } else {
        FileType::File
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata> {
        let meta = fs::metadata(path).context(format!("Failed to get metadata for {:?}", path))?;

        let file_type = if meta.is_file() {
            FileType::File
        } else if meta.is_dir() {
            FileType::Directory
        } else {
            FileType::Symlink
        };

        Ok(FileMetadata {
            size: meta.len(),
            file_type,
        })
    }

    fn read_bytes(&self, path: &Path, max_bytes: usize) -> Result<Vec<u8>> {
        let file = fs::File::open(path).context(format!("Failed to open file {:?}", path))?;
        let mut buffer = Vec::new();
        file.take(max_bytes as u64)
            .read_to_end(&mut buffer)
            .context(format!("Failed to read bytes from {:?}", path))?;
        Ok(buffer)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path).context(format!("Failed to read directory {:?}", path))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => {
                    warn!(path = %path.display(), "Skipping entry with non UTF-8 name");
                    continue;
                }
            };
            let file_type = file_type_of(
                entry
                    .file_type()
                    .context(format!("Failed to get file type for {:?}", path))?,
            );

            result.push(DirEntry {
                path,
                name,
                file_type,
            });
        }

        Ok(result)
    }
}
