use std::path::Path;

use sprig_core::{ArtifactKind, FileTree};

/// Discover the symbol names implied by existing artifacts in a directory.
///
/// Files matching the kind's suffix convention (e.g. `*.service.ts`) map to
/// `classify(stem) + suffix` symbol names. Order equals the listing order of
/// the tree; a missing or empty directory yields an empty list.
pub fn scan_siblings(tree: &dyn FileTree, dir: &Path, kind: ArtifactKind) -> Vec<String> {
    let Some(listing) = tree.get_dir(dir) else {
        return Vec::new();
    };
    listing
        .subfiles
        .iter()
        .filter_map(|file| file.strip_suffix(kind.file_suffix()))
        .map(|stem| kind.symbol_name(stem))
        .collect()
}

#[cfg(test)]
mod tests {
    use sprig_core::MemoryTree;

    use super::*;

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let tree = MemoryTree::new();
        let found = scan_siblings(&tree, Path::new("src/foo"), ArtifactKind::Service);
        assert!(found.is_empty());
    }

    #[test]
    fn test_scan_maps_suffix_to_symbol() {
        let mut tree = MemoryTree::new();
        tree.insert("src/foo/user-profile.service.ts", "");
        tree.insert("src/foo/auth.service.ts", "");
        tree.insert("src/foo/foo.controller.ts", "");
        tree.insert("src/foo/notes.txt", "");

        let services = scan_siblings(&tree, Path::new("src/foo"), ArtifactKind::Service);
        assert_eq!(services, vec!["UserProfileService", "AuthService"]);

        let controllers = scan_siblings(&tree, Path::new("src/foo"), ArtifactKind::Controller);
        assert_eq!(controllers, vec!["FooController"]);
    }

    #[test]
    fn test_scan_preserves_listing_order() {
        let mut tree = MemoryTree::new();
        tree.insert("src/foo/zeta.service.ts", "");
        tree.insert("src/foo/alpha.service.ts", "");

        let services = scan_siblings(&tree, Path::new("src/foo"), ArtifactKind::Service);
        assert_eq!(services, vec!["ZetaService", "AlphaService"]);
    }
}
