use std::path::Path;

use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};
use repokit_codegen::{ConventionMapper, WriteOutcome, publish_builtin};
use repokit_config::DEFAULT_CONFIG;
use repokit_core::{File, LocalFs};

use super::{ProjectArgs, UnwrapOrExit};
use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct InitCommand {
    /// Overwrite an existing repokit.toml without asking
    #[arg(long)]
    pub force: bool,

    /// Also copy the built-in stubs into the stub directory for editing
    #[arg(long)]
    pub stubs: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let config_path = self.project.config_path();

        if config_path.exists() && !self.force && !Self::confirm_overwrite(&config_path)? {
            println!("Kept existing {}", config_path.display());
        } else {
            File::new(&config_path, DEFAULT_CONFIG)
                .write(&LocalFs)
                .wrap_err_with(|| format!("Failed to write {}", config_path.display()))?;
            println!("Created {}", config_path.display());
        }

        if self.stubs {
            self.publish_stubs()?;
        }

        Ok(())
    }

    fn confirm_overwrite(path: &Path) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }

    fn publish_stubs(&self) -> Result<()> {
        let repo_toml = self.project.load().unwrap_or_exit();
        let mapper = ConventionMapper::new(repo_toml.config(), &self.project.project);

        let outcomes = publish_builtin(mapper.stubs_dir(), &LocalFs)
            .wrap_err("Failed to publish stubs")?;

        let mut out = TerminalOutput::new();
        out.section(&format!("Stubs in {}", mapper.stubs_dir().display()));
        for outcome in &outcomes {
            match outcome {
                WriteOutcome::Created(path) => out.added_item(&path.display().to_string()),
                WriteOutcome::Skipped(path) => out.skipped_item(&path.display().to_string()),
            }
        }
        Ok(())
    }
}
