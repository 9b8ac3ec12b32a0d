use clap::Args;
use eyre::Result;
use sprig_core::ArtifactKind;

use super::{GenerateArgs, run_generate};

#[derive(Args)]
pub struct ServiceCommand {
    #[command(flatten)]
    args: GenerateArgs,
}

impl ServiceCommand {
    pub fn run(&self) -> Result<()> {
        run_generate(ArtifactKind::Service, &self.args, None)
    }
}
