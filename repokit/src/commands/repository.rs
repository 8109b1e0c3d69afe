use clap::Args;
use eyre::Result;
use repokit_codegen::ScaffoldKind;

use super::ScaffoldArgs;

#[derive(Args)]
pub struct RepositoryCommand {
    #[command(flatten)]
    pub args: ScaffoldArgs,
}

impl RepositoryCommand {
    pub fn run(&self) -> Result<()> {
        self.args.scaffold(ScaffoldKind::Repository)
    }
}
