use clap::Args;
use eyre::Result;
use repokit_codegen::ScaffoldKind;

use super::ScaffoldArgs;

#[derive(Args)]
pub struct GetterCommand {
    #[command(flatten)]
    pub args: ScaffoldArgs,
}

impl GetterCommand {
    pub fn run(&self) -> Result<()> {
        self.args.scaffold(ScaffoldKind::Getter)
    }
}
