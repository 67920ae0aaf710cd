//! Report formatting and printing utilities.
//!
//! Kept apart from the core so that sifter can be used as a library.
//! Summaries go to stdout, diagnostics to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::core::{Discovery, SiftResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a command.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Sift(sift) => {
            print_discovery_to(sift, verbose, &mut io::stderr().lock());
            let mut stdout = io::stdout().lock();
            if verbose {
                print_untranslated_to(sift, &mut stdout);
            }
            print_summary_to(sift, &mut stdout);
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

/// Print discovery diagnostics.
///
/// A missing alias is always reported. With `verbose`, the alias binding and
/// every discovered string are listed as `file (line): "text"`.
pub fn print_discovery_to<W: Write>(result: &SiftResult, verbose: bool, writer: &mut W) {
    match &result.discovery {
        Discovery::AliasNotFound => {
            let _ = writeln!(
                writer,
                "{} no translation function found in {} source {}",
                "warning:".bold().yellow(),
                result.source_files_checked,
                plural(result.source_files_checked, "file", "files")
            );
        }
        Discovery::Found { alias, strings } if verbose => {
            let _ = writeln!(
                writer,
                "Note: translation function {} bound at {}:{}",
                alias.name().bold(),
                alias.source_file,
                alias.source_line
            );
            for string in strings {
                let _ = writeln!(writer, "  {}", string);
            }
        }
        Discovery::Found { .. } => {}
    }
}

/// List every untranslated id, one per line, in discovery order.
pub fn print_untranslated_to<W: Write>(result: &SiftResult, writer: &mut W) {
    for entry in result.untranslated.entries() {
        let _ = writeln!(writer, "  {:?}", entry.id);
    }
}

pub fn print_summary_to<W: Write>(result: &SiftResult, writer: &mut W) {
    let checked = format!(
        "{} source {}, {} template {} against {} catalog {}",
        result.source_files_checked,
        plural(result.source_files_checked, "file", "files"),
        result.template_files_checked,
        plural(result.template_files_checked, "file", "files"),
        result.catalog_size,
        plural(result.catalog_size, "entry", "entries")
    );

    let count = result.untranslated.len();
    if count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} - no untranslated strings", checked).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} untranslated {} in {}",
            FAILURE_MARK.red(),
            count,
            plural(count, "string", "strings").red(),
            checked
        );
    }
    let _ = writeln!(
        writer,
        "  {} {}",
        "-->".blue(),
        result.output_path.display()
    );
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let name = summary
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", name).green()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
