//! Diagnostics reported by the generation pipeline.
//!
//! Recoverable problems (missing descriptor, missing declaration block,
//! unparseable registration array) are reported through these types instead
//! of being raised; the run continues with the affected stage skipped.

use std::fmt;

/// Pipeline stage a diagnostic originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Sibling discovery in the destination directory.
    Scan,
    /// Template rendering.
    Render,
    /// Writing the artifact into the file tree.
    Write,
    /// Import injection and registration-array sync in the descriptor.
    Update,
    /// Removal of previously-synced entries before re-registering.
    Prune,
    /// Whitespace normalization of touched files.
    Format,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Scan => "scan",
            Stage::Render => "render",
            Stage::Write => "write",
            Stage::Update => "update",
            Stage::Prune => "prune",
            Stage::Format => "format",
        };
        f.write_str(name)
    }
}

/// How bad a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The stage failed and was skipped.
    Error,
    /// Something unexpected that did not stop the stage.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// One problem encountered during a generation run.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub stage: Stage,
    pub message: String,
    /// File the problem was found in, when known.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            stage,
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            stage,
            message: message.into(),
            location: None,
        }
    }

    /// Attach the file the problem was found in.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.stage, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
