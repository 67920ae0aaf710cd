use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::core::{TranslationCatalog, TranslationEntry, UntranslatedSet};

/// Extension segment that replaces the catalog's own extension in the output name.
pub const UNTRANSLATED_EXTENSION: &str = "untranslated.json";

/// Load a translation catalog file.
///
/// An empty file is a valid, empty catalog (first run).
pub fn load_catalog(path: impl AsRef<Path>) -> Result<TranslationCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&content, &path.to_string_lossy())
}

/// Parse catalog content: a JSON array of translation records.
///
/// Duplicate ids are resolved last-write-wins.
pub fn parse_catalog(content: &str, file_path: &str) -> Result<TranslationCatalog> {
    if content.trim().is_empty() {
        return Ok(TranslationCatalog::new());
    }

    let records: Vec<Value> = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse catalog file: {}", file_path))?;

    let mut catalog = TranslationCatalog::new();
    for (index, record) in records.into_iter().enumerate() {
        let entry = TranslationEntry::from_value(record).with_context(|| {
            format!("unable to parse translation #{} in {}", index, file_path)
        })?;
        catalog.insert(entry);
    }
    Ok(catalog)
}

/// Derive the untranslated output path from the catalog path.
///
/// The final extension is replaced, the directory is kept:
/// `locales/es.json` -> `locales/es.untranslated.json`.
pub fn untranslated_path(catalog_path: impl AsRef<Path>) -> PathBuf {
    catalog_path.as_ref().with_extension(UNTRANSLATED_EXTENSION)
}

/// Write the untranslated set, in discovery order.
pub fn write_untranslated(path: impl AsRef<Path>, untranslated: &UntranslatedSet) -> Result<()> {
    write_entries(path.as_ref(), untranslated.entries())
}

/// Write a whole catalog, ordered by id.
pub fn write_catalog(path: impl AsRef<Path>, catalog: &TranslationCatalog) -> Result<()> {
    write_entries(path.as_ref(), catalog.sorted_entries())
}

fn write_entries<'a>(
    path: &Path,
    entries: impl IntoIterator<Item = &'a TranslationEntry>,
) -> Result<()> {
    let entries: Vec<&TranslationEntry> = entries.into_iter().collect();
    let mut json = serde_json::to_string_pretty(&entries)
        .with_context(|| format!("Failed to serialize translations for {}", path.display()))?;
    json.push('\n');

    write_atomic(path, json.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Write through a temporary file in the destination directory, then rename
/// it over the destination.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(contents)?;
    temp_file.flush()?;
    temp_file.persist(path)?;
    Ok(())
}
