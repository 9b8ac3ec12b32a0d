use std::path::{Path, PathBuf};

use eyre::Result;

use crate::tree::FileTree;

/// Trait for types that represent a generated file.
pub trait GeneratedFile {
    /// Get the file path relative to the destination directory.
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the file into the tree, returning the path it landed at.
    fn write_to(&self, tree: &mut dyn FileTree, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        tree.overwrite(&path, &self.render())?;
        Ok(path)
    }
}
