use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ApiArgs, codegen_options};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Output directory (overrides luagd.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated bindings without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Show how long each pipeline phase took
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (config, api_file) = self.api.open();
        let output_dir = self.output.as_ref().unwrap_or(&config.output.dir);

        let report = ops::generate(
            api_file,
            codegen_options(&config),
            GenerateOptions {
                output_dir,
                pretty: config.output.pretty && !self.compact,
                dry_run: self.dry_run,
                verbose: self.verbose,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }
}
