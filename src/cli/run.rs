use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, sift::sift},
};

/// Dispatch parsed arguments to the matching command.
pub fn run(Arguments { command, sift: args }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => {
            let cwd = std::env::current_dir().context("Cannot determine current directory")?;
            init(&cwd)
        }
        None => sift(&args),
    }
}
