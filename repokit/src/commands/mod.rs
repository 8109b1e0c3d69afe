mod check;
mod completions;
mod filter;
mod getter;
mod init;
mod repository;
mod wire;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use filter::FilterCommand;
use getter::GetterCommand;
use init::InitCommand;
use repokit_codegen::{ModelIdentifier, ScaffoldKind};
use repokit_config::RepoToml;
use repository::RepositoryCommand;
use wire::WireCommand;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// Default configuration file name, looked up in the project directory.
pub(crate) const CONFIG_FILE: &str = "repokit.toml";

/// Extension trait for exiting on config and argument errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for repokit_config::Result<T> {
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

impl<T> UnwrapOrExit<T> for repokit_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

/// Options shared by every command that reads a project.
#[derive(Args, Debug, Clone)]
pub(crate) struct ProjectArgs {
    /// Path to repokit.toml (defaults to <project>/repokit.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,
}

impl ProjectArgs {
    /// Path of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.project.join(CONFIG_FILE))
    }

    /// Load the configuration. A missing file is only an error when the
    /// path was given explicitly.
    pub fn load(&self) -> repokit_config::Result<RepoToml> {
        match &self.config {
            Some(path) => RepoToml::open(path),
            None => RepoToml::open_or_default(self.config_path()),
        }
    }
}

/// Arguments of the scaffolding commands.
#[derive(Args, Debug, Clone)]
pub(crate) struct ScaffoldArgs {
    /// Model name, e.g. 'Invoice' or 'Accounting/Invoice'
    pub model: String,

    /// Show what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

impl ScaffoldArgs {
    /// Resolve the model argument, exiting on an invalid name.
    pub fn model(&self) -> ModelIdentifier {
        ModelIdentifier::resolve(&self.model).unwrap_or_exit()
    }

    /// Run one scaffold batch and print what it did.
    ///
    /// Files written before a fatal error are still listed.
    pub fn scaffold(&self, kind: ScaffoldKind) -> Result<()> {
        let model = self.model();
        let repo_toml = self.project.load().unwrap_or_exit();

        let summary = ops::scaffold(
            kind,
            &model,
            repo_toml.config(),
            ops::scaffold::ScaffoldOptions {
                project_dir: &self.project.project,
                dry_run: self.dry_run,
            },
        )?;
        summary.render(&mut TerminalOutput::new());

        match summary.error {
            Some(error) => Err(eyre::Report::new(error)
                .wrap_err(format!("Failed to create {} for {}", kind.as_str(), model))),
            None => Ok(()),
        }
    }
}

#[derive(Parser)]
#[command(name = "repokit")]
#[command(version)]
#[command(about = "Scaffold repositories, events, filters and getters for Eloquent models")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Repository(cmd) => cmd.run(),
            Commands::Filter(cmd) => cmd.run(),
            Commands::Getter(cmd) => cmd.run(),
            Commands::Wire(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default repokit.toml
    Init(InitCommand),

    /// Create a repository, its contract and the model lifecycle events and listeners
    Repository(RepositoryCommand),

    /// Create a filter class for a model
    Filter(FilterCommand),

    /// Create a getter class for a model
    Getter(GetterCommand),

    /// Show or write the repository bindings and event listener map
    Wire(WireCommand),

    /// Validate repokit.toml and show the state of registered models
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
