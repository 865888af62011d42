pub mod action;

use clap::{Parser, Subcommand};

use self::action::{build, inspect};

#[derive(Parser)]
#[clap(name = "wbc", about = "Battle unit control language compiler")]
pub struct Command {
    #[clap(subcommand)]
    pub action: SubCommand,
}

#[derive(Subcommand)]
pub enum SubCommand {
    Build(build::Action),
    Inspect(inspect::Action),
}
