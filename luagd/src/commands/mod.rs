mod check;
mod completions;
mod generate;
mod info;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use luagd_bindgen_codegen::pipeline::CodegenOptions;
use luagd_bindgen_manifest::{ApiFile, Config};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for luagd_bindgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "luagd")]
#[command(version)]
#[command(about = "Generate Luau binding tables from a Godot extension API dump")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bindings.json from extension_api.json
    Generate(GenerateCommand),

    /// Validate the API dump without generating bindings
    Check(CheckCommand),

    /// Show the API version and binding statistics
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Flags shared by every command that reads the API dump.
#[derive(Args)]
pub(crate) struct ApiArgs {
    /// Path to luagd.toml (defaults to ./luagd.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to extension_api.json (overrides luagd.toml)
    #[arg(short, long)]
    pub api: Option<PathBuf>,

    /// Treat unresolvable property accessors as errors
    #[arg(long)]
    pub strict: bool,
}

impl ApiArgs {
    /// Load the config, with command-line flags taking precedence.
    pub fn config(&self) -> Config {
        let mut config = Config::load(self.config.as_deref()).unwrap_or_exit();
        if let Some(api) = &self.api {
            config.api.path = api.clone();
        }
        if self.strict {
            config.bindgen.strict_accessors = true;
        }
        config
    }

    /// Load the config and open the API dump it points to.
    pub fn open(&self) -> (Config, ApiFile) {
        let config = self.config();
        let api_file = ApiFile::open(&config.api.path).unwrap_or_exit();
        (config, api_file)
    }
}

/// Pipeline options derived from the loaded config.
pub(crate) fn codegen_options(config: &Config) -> CodegenOptions {
    CodegenOptions::from(&config.bindgen)
}
