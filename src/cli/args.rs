//! CLI argument definitions using clap.
//!
//! The default invocation sifts a Go project:
//!
//! ```text
//! sift [OPTIONS] <SOURCE> <TEMPLATES> <CATALOG>
//! ```
//!
//! `sift init` writes a default `.siftrc.json` instead.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "sift",
    author,
    version,
    about = "Find Go i18n strings missing from a go-i18n translation catalog",
    long_about = None,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub sift: SiftArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Init) => false,
            None => self.sift.verbose,
        }
    }
}

/// Arguments of the default sift invocation.
///
/// Positionals are optional at the type level so that `sift init` parses;
/// clap still requires them whenever no subcommand is given.
#[derive(Debug, Clone, Default, Args)]
pub struct SiftArgs {
    /// Go source file, directory or glob pattern
    #[arg(value_name = "SOURCE", required = true)]
    pub source: Option<String>,

    /// Template file, directory or glob pattern
    #[arg(value_name = "TEMPLATES", required = true)]
    pub templates: Option<String>,

    /// Existing go-i18n translation catalog (JSON)
    #[arg(value_name = "CATALOG", required = true)]
    pub catalog: Option<PathBuf>,

    /// Where to write untranslated entries [default: <CATALOG stem>.untranslated.json]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file to use instead of searching for .siftrc.json
    #[arg(short, long, value_name = "PATH", env = "SIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when untranslated strings are found
    #[arg(long)]
    pub fail_on_untranslated: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .siftrc.json configuration file
    Init,
}
