use std::fmt;

/// A string literal found to be passed as a translation id.
///
/// Identity is `text` alone. `source_file` and `source_line` are provenance
/// used for reporting only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscoveredString {
    pub text: String,
    pub source_file: String,
    /// 1-indexed line of the literal, or 0 when unknown (template placeholders).
    pub source_line: usize,
}

impl DiscoveredString {
    pub fn new(text: impl Into<String>, source_file: impl Into<String>, source_line: usize) -> Self {
        Self {
            text: text.into(),
            source_file: source_file.into(),
            source_line,
        }
    }

    /// A string found in a template, where placeholders carry no line.
    pub fn positionless(text: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self::new(text, source_file, 0)
    }
}

impl fmt::Display for DiscoveredString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {:?}", self.source_file, self.source_line, self.text)
    }
}

/// The local name bound to the translation-function factory's result.
///
/// Produced once per run by the alias resolver. There is no way to change it
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    name: String,
    /// Where the binding assignment was found.
    pub source_file: String,
    pub source_line: usize,
}

impl Alias {
    pub fn new(name: impl Into<String>, source_file: impl Into<String>, source_line: usize) -> Self {
        Self {
            name: name.into(),
            source_file: source_file.into(),
            source_line,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
