//! The generation pipeline.
//!
//! Stages run strictly in order: scan siblings, render the artifact, write
//! it, update the module descriptor, format the descriptor, format the
//! generated file. Each generation run is isolated and run-to-completion;
//! there is no locking, so concurrent runs against the same descriptor are
//! not supported.

use std::path::{Path, PathBuf};

use eyre::Result;
use sprig_core::{ArtifactKind, FileTree, GeneratedFile, dasherize};
use sprig_edit::{ensure_import, import_statement, remove_entry, remove_import_lines, sync_entry};

use crate::{
    diagnostic::{Diagnostic, Stage},
    files::{ControllerTs, ModuleTs, ServiceTs},
    format::Formatter,
    siblings::scan_siblings,
};

/// Marker token identifying the declaration block in the descriptor.
pub const DECLARATION_MARKER: &str = "@Module(";

/// Options for a single generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Raw artifact name.
    pub name: String,
    /// Destination base directory.
    pub path: PathBuf,
    /// Generate directly under `path` instead of `path/<dash-case name>`.
    pub flat: bool,
    /// Module descriptor file to register the artifact in.
    pub module_path: PathBuf,
    /// When set, previously-synced entries derived from this path's parent
    /// directory are pruned from the descriptor before re-synchronizing.
    pub exempt_path: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: PathBuf::from("src"),
            flat: false,
            module_path: PathBuf::from("src/app.module.ts"),
            exempt_path: None,
        }
    }

    /// Destination directory for generated files.
    pub fn destination(&self) -> PathBuf {
        if self.flat {
            self.path.clone()
        } else {
            self.path.join(dasherize(&self.name))
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
    /// Problems reported along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerateReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Run a generation pipeline for one artifact.
///
/// Recoverable problems (missing descriptor, missing declaration block,
/// unparseable array) become diagnostics and leave the descriptor untouched;
/// file tree failures propagate and abort the remainder of the run, which may
/// leave earlier stages' writes in place.
pub fn generate(
    tree: &mut dyn FileTree,
    kind: ArtifactKind,
    opts: &GenerateOptions,
    formatter: &dyn Formatter,
) -> Result<GenerateReport> {
    let mut diagnostics = Vec::new();
    let destination = opts.destination();

    // ScanSiblings
    let services = scan_siblings(tree, &destination, ArtifactKind::Service);
    let controllers = scan_siblings(tree, &destination, ArtifactKind::Controller);

    // RenderTemplate + WriteFiles
    let artifact: Box<dyn GeneratedFile> = match kind {
        ArtifactKind::Controller => Box::new(ControllerTs::new(opts.name.as_str(), services)),
        ArtifactKind::Service => Box::new(ServiceTs::new(opts.name.as_str())),
        ArtifactKind::Module => Box::new(ModuleTs::new(opts.name.as_str(), controllers, services)),
    };
    let generated_path = artifact.write_to(tree, &destination)?;
    let written = vec![generated_path.clone()];

    // UpdateDescriptor + FormatDescriptor
    update_descriptor(tree, kind, opts, formatter, &mut diagnostics)?;

    // FormatGeneratedFile
    match tree.read(&generated_path) {
        Some(text) => tree.overwrite(&generated_path, &formatter.format(&text))?,
        None => diagnostics.push(Diagnostic::warning(
            Stage::Format,
            format!(
                "generated file {} not found for formatting",
                generated_path.display()
            ),
        )),
    }

    Ok(GenerateReport {
        written,
        diagnostics,
    })
}

fn update_descriptor(
    tree: &mut dyn FileTree,
    kind: ArtifactKind,
    opts: &GenerateOptions,
    formatter: &dyn Formatter,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<()> {
    let descriptor = opts.module_path.display().to_string();
    let Some(mut source) = tree.read(&opts.module_path) else {
        diagnostics.push(Diagnostic::error(
            Stage::Update,
            format!("module file ({}) not found", descriptor),
        ));
        return Ok(());
    };

    // Prune previously-synced entries when regenerating an aggregator.
    if let Some(exempt) = &opts.exempt_path {
        let sibling_dir = exempt.parent().unwrap_or(Path::new(""));
        for pruned_kind in [ArtifactKind::Service, ArtifactKind::Controller] {
            for symbol in scan_siblings(tree, sibling_dir, pruned_kind) {
                source = remove_import_lines(&source, &symbol);
                match remove_entry(
                    &source,
                    DECLARATION_MARKER,
                    pruned_kind.slot(),
                    &symbol,
                    &descriptor,
                ) {
                    Ok(next) => source = next,
                    Err(e) => {
                        let diag =
                            Diagnostic::error(Stage::Prune, e.to_string()).at(descriptor.clone());
                        diagnostics.push(diag);
                        return Ok(());
                    }
                }
            }
        }
    }

    let symbol = kind.symbol_name(&opts.name);
    let statement = import_statement(&symbol, &artifact_import_path(kind, opts));
    source = ensure_import(&source, &statement);

    match sync_entry(&source, DECLARATION_MARKER, kind.slot(), &symbol, &descriptor) {
        Ok(next) => source = next,
        Err(e) => {
            diagnostics.push(Diagnostic::error(Stage::Update, e.to_string()).at(descriptor));
            return Ok(());
        }
    }

    tree.overwrite(&opts.module_path, &formatter.format(&source))?;
    Ok(())
}

/// Import path of the freshly generated artifact, relative to the source root.
fn artifact_import_path(kind: ArtifactKind, opts: &GenerateOptions) -> String {
    let dash = dasherize(&opts.name);
    let stem = kind.file_suffix().trim_end_matches(".ts");
    if opts.flat {
        format!("{}/{}{}", opts.path.display(), dash, stem)
    } else {
        format!("{}/{}/{}{}", opts.path.display(), dash, dash, stem)
    }
}
