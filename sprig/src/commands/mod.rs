mod completions;
mod controller;
mod module;
mod service;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use controller::ControllerCommand;
use eyre::Result;
use module::ModuleCommand;
use service::ServiceCommand;
use sprig_core::{ArtifactKind, FsTree};
use sprig_gen::{GenerateOptions, LightFormatter, generate};

#[derive(Parser)]
#[command(name = "sprig")]
#[command(version)]
#[command(about = "Scaffold artifacts and keep the module descriptor wired up")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Controller(cmd) => cmd.run(),
            Commands::Service(cmd) => cmd.run(),
            Commands::Module(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a controller and register it under controllers:
    Controller(ControllerCommand),

    /// Generate a service and register it under providers:
    Service(ServiceCommand),

    /// Generate an aggregator module and register it under imports:
    Module(ModuleCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Arguments shared by every generation subcommand.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Raw artifact name (any casing; file and symbol names are derived)
    pub name: String,

    /// Destination base directory
    #[arg(short, long, default_value = "src")]
    pub path: PathBuf,

    /// Generate directly under the destination instead of a named subdirectory
    #[arg(long)]
    pub flat: bool,

    /// Module descriptor file to register the artifact in
    #[arg(short, long, default_value = "src/app.module.ts")]
    pub module_path: PathBuf,
}

pub(crate) fn run_generate(
    kind: ArtifactKind,
    args: &GenerateArgs,
    exempt_path: Option<PathBuf>,
) -> Result<()> {
    let mut opts = GenerateOptions::new(args.name.as_str());
    opts.path = args.path.clone();
    opts.flat = args.flat;
    opts.module_path = args.module_path.clone();
    opts.exempt_path = exempt_path;

    let mut tree = FsTree::new(".");
    let report = generate(&mut tree, kind, &opts, &LightFormatter)?;

    for path in &report.written {
        println!("+ {}", path.display());
    }
    for diag in &report.diagnostics {
        eprintln!("{}", diag);
    }

    Ok(())
}
