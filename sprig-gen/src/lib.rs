//! Artifact templates and the generation pipeline.
//!
//! A generation run scans the destination directory for sibling artifacts,
//! renders the requested artifact from its template, writes it into the file
//! tree, wires it into the module descriptor, and formats both touched files.
//! Recoverable problems surface as [`Diagnostic`]s; I/O failures propagate.

mod diagnostic;
pub mod files;
mod format;
mod pipeline;
mod siblings;

pub use diagnostic::{Diagnostic, Severity, Stage};
pub use format::{Formatter, LightFormatter};
pub use pipeline::{DECLARATION_MARKER, GenerateOptions, GenerateReport, generate};
pub use siblings::scan_siblings;
