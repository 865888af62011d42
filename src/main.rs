#![allow(clippy::match_like_matches_macro)]

use action::{build::execute_build, inspect::execute_inspect};
use command::{Command, SubCommand};

mod action;
mod ast;
mod attribs;
mod codegen;
mod command;
mod compiler;
mod container;
mod error;
mod lexer;
mod opcodes;
mod parser;
mod utils;
mod version;

use clap::Parser;

use crate::error::all_error::AllError;

#[tokio::main]
async fn main() -> Result<(), AllError> {
    let command = Command::parse();

    match command.action {
        SubCommand::Build(action) => {
            execute_build(action).await?;
        }
        SubCommand::Inspect(action) => {
            execute_inspect(action).await?;
        }
    }

    Ok(())
}
