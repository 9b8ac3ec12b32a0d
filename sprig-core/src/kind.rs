use crate::naming::{classify, dasherize};

/// Category of generated artifact.
///
/// Each kind carries its file-name suffix, its symbol-name suffix, and the
/// registration slot it wires into inside the module descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// A routed request handler, registered under `controllers:`.
    Controller,
    /// An injectable business service, registered under `providers:`.
    Service,
    /// An aggregator module, registered under `imports:`.
    Module,
}

impl ArtifactKind {
    /// File-name suffix for artifacts of this kind.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => ".controller.ts",
            ArtifactKind::Service => ".service.ts",
            ArtifactKind::Module => ".module.ts",
        }
    }

    /// Suffix appended to the classified name to form the symbol name.
    pub fn symbol_suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "Controller",
            ArtifactKind::Service => "Service",
            ArtifactKind::Module => "Module",
        }
    }

    /// Registration array field this kind is wired into.
    pub fn slot(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controllers:",
            ArtifactKind::Service => "providers:",
            ArtifactKind::Module => "imports:",
        }
    }

    /// Derive the registered symbol name for a raw artifact name.
    pub fn symbol_name(&self, raw: &str) -> String {
        format!("{}{}", classify(raw), self.symbol_suffix())
    }

    /// Derive the generated file name for a raw artifact name.
    pub fn file_name(&self, raw: &str) -> String {
        format!("{}{}", dasherize(raw), self.file_suffix())
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Controller => write!(f, "controller"),
            ArtifactKind::Service => write!(f, "service"),
            ArtifactKind::Module => write!(f, "module"),
        }
    }
}
