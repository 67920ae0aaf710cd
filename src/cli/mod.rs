use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, SiftArgs};
pub use commands::{CommandResult, CommandSummary, InitSummary};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}
