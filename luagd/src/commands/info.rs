use clap::Args;
use eyre::Result;

use super::{ApiArgs, codegen_options};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    #[command(flatten)]
    pub api: ApiArgs,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let (config, api_file) = self.api.open();

        let report = ops::info(api_file, codegen_options(&config), &config.output.dir)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
