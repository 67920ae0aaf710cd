use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fmt,
    str::FromStr,
};

use anyhow::{Result, anyhow, bail};
use serde::Serialize;
use serde_json::{Map, Value};

/// CLDR plural categories accepted as keys of a plural translation.
///
/// Declaration order is the canonical order, so plural bodies serialize as
/// `zero, one, two, few, many, other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl FromStr for PluralCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zero" => Ok(Self::Zero),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "few" => Ok(Self::Few),
            "many" => Ok(Self::Many),
            "other" => Ok(Self::Other),
            _ => Err(anyhow!("unknown plural category \"{}\"", s)),
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// The translated content of a catalog record.
///
/// go-i18n stores either a single string or one string per plural category:
///
/// - `"translation": "Guardar"`
/// - `"translation": {"one": "{{.Count}} archivo", "other": "{{.Count}} archivos"}`
///
/// A `null` or missing translation is read as an empty `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TranslationBody {
    Text(String),
    Plural(BTreeMap<PluralCategory, String>),
}

impl Default for TranslationBody {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl TranslationBody {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Plural(forms) => forms.values().all(String::is_empty),
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::String(text) => Ok(Self::Text(text)),
            Value::Object(forms) => {
                let mut plural = BTreeMap::new();
                for (key, value) in forms {
                    let category: PluralCategory = key.parse()?;
                    let text = match value {
                        Value::String(text) => text,
                        other => bail!(
                            "plural category \"{}\" has a {} value; expected string",
                            category,
                            value_kind(&other)
                        ),
                    };
                    plural.insert(category, text);
                }
                Ok(Self::Plural(plural))
            }
            other => bail!("unsupported {} value for translation", value_kind(&other)),
        }
    }
}

/// A single record of a translation catalog.
///
/// Fields other than `id` and `translation` are kept verbatim in `extra`, in
/// their original order, and written back after the two known fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationEntry {
    pub id: String,
    pub translation: TranslationBody,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TranslationEntry {
    /// A fresh record with an empty translation body.
    pub fn untranslated(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            translation: TranslationBody::default(),
            extra: Map::new(),
        }
    }

    pub fn with_translation(id: impl Into<String>, translation: TranslationBody) -> Self {
        Self {
            id: id.into(),
            translation,
            extra: Map::new(),
        }
    }

    /// Convert one decoded JSON record into an entry.
    pub fn from_value(value: Value) -> Result<Self> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => bail!("expected an object, found {}", value_kind(&other)),
        };

        let mut id = None;
        let mut translation = TranslationBody::default();
        let mut extra = Map::new();
        for (key, value) in fields {
            match key.as_str() {
                "id" => match value {
                    Value::String(s) => id = Some(s),
                    other => bail!("\"id\" must be a string, found {}", value_kind(&other)),
                },
                "translation" => translation = TranslationBody::from_value(value)?,
                _ => {
                    extra.insert(key, value);
                }
            }
        }

        let id = id.ok_or_else(|| anyhow!("missing \"id\" key"))?;
        Ok(Self {
            id,
            translation,
            extra,
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Existing translations keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationCatalog {
    entries: HashMap<String, TranslationEntry>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing (and returning) any previous entry with the same id.
    pub fn insert(&mut self, entry: TranslationEntry) -> Option<TranslationEntry> {
        self.entries.insert(entry.id.clone(), entry)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&TranslationEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by id, for deterministic output.
    pub fn sorted_entries(&self) -> Vec<&TranslationEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }
}

impl FromIterator<TranslationEntry> for TranslationCatalog {
    fn from_iter<I: IntoIterator<Item = TranslationEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

/// Catalog-shaped set of ids that still need a translation.
///
/// Keeps first-insertion order; inserting an id twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UntranslatedSet {
    entries: Vec<TranslationEntry>,
    ids: HashSet<String>,
}

impl UntranslatedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if an entry with the same id is already present.
    pub fn insert(&mut self, entry: TranslationEntry) -> bool {
        if !self.ids.insert(entry.id.clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }
}
