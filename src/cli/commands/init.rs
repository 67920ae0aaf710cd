use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.siftrc.json` into `dir`.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    let mut json = default_config_json()?;
    json.push('\n');
    fs::write(&config_path, json)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { config_path }),
        fail_on_untranslated: false,
    })
}
