//! Core utilities and types for the sprig artifact generator.
//!
//! This crate provides the fundamental pieces shared across the sprig
//! ecosystem: name derivation, the file tree abstraction, and artifact
//! kind metadata.

mod file;
mod kind;
mod naming;
mod tree;

// Artifact metadata
pub use kind::ArtifactKind;
// File abstractions
pub use file::GeneratedFile;
// String utilities
pub use naming::{camelize, classify, dasherize};
pub use tree::{DirListing, FileTree, FsTree, MemoryTree};
