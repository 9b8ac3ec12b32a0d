use clap::Args;
use eyre::Result;
use sprig_core::ArtifactKind;

use super::{GenerateArgs, run_generate};

#[derive(Args)]
pub struct ControllerCommand {
    #[command(flatten)]
    args: GenerateArgs,
}

impl ControllerCommand {
    pub fn run(&self) -> Result<()> {
        run_generate(ArtifactKind::Controller, &self.args, None)
    }
}
