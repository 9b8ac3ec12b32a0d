use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sprig_core::ArtifactKind;

use super::{GenerateArgs, run_generate};

#[derive(Args)]
pub struct ModuleCommand {
    #[command(flatten)]
    args: GenerateArgs,

    /// Prune registrations previously synced from this path's parent
    /// directory before re-registering (used when regenerating a module
    /// whose members moved into it)
    #[arg(long)]
    exempt_path: Option<PathBuf>,
}

impl ModuleCommand {
    pub fn run(&self) -> Result<()> {
        run_generate(ArtifactKind::Module, &self.args, self.exempt_path.clone())
    }
}
