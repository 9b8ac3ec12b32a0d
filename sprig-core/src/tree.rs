use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::Result;
use indexmap::IndexMap;

/// Immediate contents of a directory.
#[derive(Debug, Clone, Default)]
pub struct DirListing {
    /// Plain file names (no path components), in listing order.
    pub subfiles: Vec<String>,
}

/// Abstraction over the file tree a generation run operates on.
///
/// Paths are relative to the tree root. The listing order reported by
/// [`FileTree::get_dir`] is whatever the backing store yields; callers must
/// not assume it is sorted.
pub trait FileTree {
    /// Read a file's content, or `None` if it does not exist.
    fn read(&self, path: &Path) -> Option<String>;

    /// Write a file, creating parent directories as needed.
    fn overwrite(&mut self, path: &Path, content: &str) -> Result<()>;

    /// List the immediate files of a directory, or `None` if it does not exist.
    fn get_dir(&self, path: &Path) -> Option<DirListing>;
}

/// File tree backed by the real filesystem, rooted at a base directory.
pub struct FsTree {
    root: PathBuf,
}

impl FsTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl FileTree for FsTree {
    fn read(&self, path: &Path) -> Option<String> {
        fs::read_to_string(self.resolve(path)).ok()
    }

    fn overwrite(&mut self, path: &Path, content: &str) -> Result<()> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full, content)?;
        Ok(())
    }

    fn get_dir(&self, path: &Path) -> Option<DirListing> {
        let entries = fs::read_dir(self.resolve(path)).ok()?;
        let mut subfiles = Vec::new();
        for entry in entries.flatten() {
            if entry.file_type().is_ok_and(|ty| ty.is_file()) {
                subfiles.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Some(DirListing { subfiles })
    }
}

/// In-memory file tree. Listing order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    files: IndexMap<PathBuf, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, preserving insertion order for directory listings.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Remove a file, returning its content if it existed.
    pub fn remove(&mut self, path: &Path) -> Option<String> {
        self.files.shift_remove(path)
    }

    /// Check whether a file exists.
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

impl FileTree for MemoryTree {
    fn read(&self, path: &Path) -> Option<String> {
        self.files.get(path).cloned()
    }

    fn overwrite(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn get_dir(&self, path: &Path) -> Option<DirListing> {
        let subfiles: Vec<String> = self
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        if subfiles.is_empty() {
            None
        } else {
            Some(DirListing { subfiles })
        }
    }
}
