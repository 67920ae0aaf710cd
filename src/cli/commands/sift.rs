use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::{cli::args::SiftArgs, core::SiftContext};

pub fn sift(args: &SiftArgs) -> Result<CommandResult> {
    let ctx = SiftContext::new(args)?;
    let result = ctx.run()?;

    Ok(CommandResult {
        summary: CommandSummary::Sift(result),
        fail_on_untranslated: args.fail_on_untranslated,
    })
}
