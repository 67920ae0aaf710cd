//! Template scanning.
//!
//! Templates call the translation function through a placeholder such as
//! `{{L10n "Cancel"}}`. No alias is involved: the placeholder name is fixed.

use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::core::{DiscoveredString, parsers::literal::unquote};

/// Matches one `{{ L10n ... }}` action (trim markers allowed) and captures its arguments.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{-?\s*L10n\s+(.*?)\s*-?\}\}").expect("placeholder regex is valid")
});

/// Scan every template file, in order.
pub fn scan_templates(files: &[String]) -> Result<Vec<DiscoveredString>> {
    let mut strings = Vec::new();
    for file in files {
        strings.extend(scan_template_file(file)?);
    }
    Ok(strings)
}

pub fn scan_template_file(path: impl AsRef<Path>) -> Result<Vec<DiscoveredString>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file: {}", path.display()))?;
    scan_template(&content, &path.to_string_lossy())
}

/// Extract the string literal of every placeholder in a template.
///
/// Placeholders whose first argument is not a string literal (`{{L10n .Key}}`)
/// yield nothing. Broken quoting is an error naming the template.
pub fn scan_template(content: &str, file_path: &str) -> Result<Vec<DiscoveredString>> {
    let mut strings = Vec::new();

    for caps in PLACEHOLDER_REGEX.captures_iter(content) {
        let placeholder = &caps[0];
        let text = placeholder_text(&caps[1]).with_context(|| {
            format!(
                "Malformed placeholder {} in template {}",
                placeholder, file_path
            )
        })?;
        if let Some(text) = text {
            strings.push(DiscoveredString::positionless(text, file_path));
        }
    }

    Ok(strings)
}

/// Decode the leading string literal of the placeholder arguments, if any.
fn placeholder_text(args: &str) -> Result<Option<String>> {
    let Some(literal) = leading_literal(args)? else {
        return Ok(None);
    };

    let rest = &args[literal.len()..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        bail!("unexpected text after string literal: {}", rest);
    }

    unquote(literal).map(Some)
}

/// Split off the quoted literal at the start of `args`, quotes included.
fn leading_literal(args: &str) -> Result<Option<&str>> {
    let mut chars = args.char_indices();
    match chars.next() {
        Some((_, '"')) => {
            let mut escaped = false;
            for (i, c) in chars {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => return Ok(Some(&args[..=i])),
                    _ => {}
                }
            }
            bail!("unterminated string literal: {}", args)
        }
        Some((_, '`')) => match args[1..].find('`') {
            Some(end) => Ok(Some(&args[..end + 2])),
            None => bail!("unterminated raw string: {}", args),
        },
        _ => Ok(None),
    }
}
