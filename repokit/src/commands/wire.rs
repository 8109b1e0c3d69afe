use clap::{Args, ValueEnum};
use eyre::{Context, Result};

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// Output format of the wiring plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct WireCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write the generated service provider into the application
    #[arg(short, long)]
    pub write: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

impl WireCommand {
    pub fn run(&self) -> Result<()> {
        let repo_toml = self.project.load().unwrap_or_exit();

        let report = ops::wire(
            repo_toml.config(),
            ops::wire::WireOptions {
                project_dir: &self.project.project,
                write: self.write,
            },
        )?;

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = report
                    .wiring
                    .to_json()
                    .wrap_err("Failed to serialize wiring")?;
                println!("{}", json);
            }
        }
        Ok(())
    }
}
