use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let repo_toml = self.project.load().unwrap_or_exit();

        let report = ops::check(&repo_toml, &self.project.project).unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
