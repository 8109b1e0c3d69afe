use clap::Args;
use eyre::Result;
use repokit_codegen::ScaffoldKind;

use super::ScaffoldArgs;

#[derive(Args)]
pub struct FilterCommand {
    #[command(flatten)]
    pub args: ScaffoldArgs,
}

impl FilterCommand {
    pub fn run(&self) -> Result<()> {
        self.args.scaffold(ScaffoldKind::Filter)
    }
}
