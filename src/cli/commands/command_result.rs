use std::path::PathBuf;

use crate::{cli::exit_status::ExitStatus, core::SiftResult};

#[derive(Debug)]
pub enum CommandSummary {
    Sift(SiftResult),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: PathBuf,
}

/// Result of running a sift command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, a non-empty untranslated set exits with status 1.
    pub fail_on_untranslated: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Sift(result)
                if self.fail_on_untranslated && !result.untranslated.is_empty() =>
            {
                ExitStatus::Failure
            }
            _ => ExitStatus::Success,
        }
    }
}
