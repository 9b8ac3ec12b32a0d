//! Surgical text mutation of module descriptor files.
//!
//! The descriptor (e.g. `src/app.module.ts`) is a hand-authored file hosting
//! a single declaration block with named registration arrays. This crate
//! edits that file in place: it ensures import statements, synchronizes
//! registration-array entries, and prunes previously-synced entries, all as
//! string surgery on top of a shallow statement scan rather than a full
//! parse. Unrelated content and formatting are left untouched; a formatting
//! pass downstream normalizes the result.
//!
//! All operations are idempotent: repeated runs converge and never duplicate
//! imports or entries.

mod error;
mod imports;
mod prune;
mod registry;
mod scan;

pub use error::{Error, Result};
pub use imports::{ensure_import, import_statement};
pub use prune::{remove_entry, remove_import_lines};
pub use registry::{clean_array_content, sync_entry};
pub use scan::{last_import_end, naive_bracket_span};
