use super::{DirEntry, FileMetadata, FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<Vec<u8>>,
    pub file_type: FileType,
}

/// In-memory filesystem for tests
///
/// Entries live in a `BTreeMap`, so `read_dir` returns children in path order.
/// Paths registered with [`MockFileSystem::fail_on`] make every fallible
/// operation on them return an error, which is how tests simulate unreadable
/// directories and failed stats.
pub struct MockFileSystem {
    files: RwLock<BTreeMap<PathBuf, MockEntry>>,
    failing: RwLock<BTreeSet<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(BTreeMap::new()),
            failing: RwLock::new(BTreeSet::new()),
            root: root.clone(),
        };
        fs.add_dir(&root);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.insert_file(path.as_ref(), content.as_bytes().to_vec());
    }

    /// Adds a file of exactly `size` bytes
    pub fn add_sized_file(&self, path: impl AsRef<Path>, size: usize) {
        self.insert_file(path.as_ref(), vec![0u8; size]);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        self.ensure_parents(&mut files, &path);

        files.insert(
            path,
            MockEntry {
                content: None,
                file_type: FileType::Directory,
            },
        );
    }

    pub fn fail_on(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.failing.write().unwrap().insert(path);
    }

    fn insert_file(&self, path: &Path, content: Vec<u8>) {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            self.ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content),
                file_type: FileType::File,
            },
        );
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(&self, files: &mut BTreeMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
            });
        }
    }

    fn check_failing(&self, path: &Path) -> Result<()> {
        if self.failing.read().unwrap().contains(path) {
            return Err(anyhow!("Simulated I/O failure: {:?}", path));
        }
        Ok(())
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.file_type == FileType::Directory)
            .unwrap_or(false)
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata> {
        let path = self.normalize_path(path);
        self.check_failing(&path)?;
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("Path not found: {:?}", path))?;

        Ok(FileMetadata {
            size: entry.content.as_ref().map(|c| c.len() as u64).unwrap_or(0),
            file_type: entry.file_type,
        })
    }

    fn read_bytes(&self, path: &Path, max_bytes: usize) -> Result<Vec<u8>> {
        let path = self.normalize_path(path);
        self.check_failing(&path)?;
        let files = self.files.read().unwrap();
        let content = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?
            .content
            .as_ref()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))?;

        Ok(content[..content.len().min(max_bytes)].to_vec())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        self.check_failing(&path)?;
        let files = self.files.read().unwrap();

        match files.get(&path) {
            Some(entry) if entry.file_type == FileType::Directory => {}
            Some(_) => return Err(anyhow!("Not a directory: {:?}", path)),
            None => return Err(anyhow!("Directory not found: {:?}", path)),
        }

        let entries = files
            .iter()
            .filter(|(file_path, _)| file_path.parent() == Some(path.as_path()))
            .map(|(file_path, entry)| DirEntry {
                path: file_path.clone(),
                name: file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string(),
                file_type: entry.file_type,
            })
            .collect();

        Ok(entries)
    }
}
