//! Core data types shared by the discovery and catalog phases.
//!
//! ## Module Structure
//!
//! - `source`: Discovery-side types (DiscoveredString, Alias)
//! - `translation`: Catalog-side types (TranslationEntry, TranslationCatalog, UntranslatedSet)

pub mod source;
pub mod translation;

pub use source::{Alias, DiscoveredString};
pub use translation::{
    PluralCategory, TranslationBody, TranslationCatalog, TranslationEntry, UntranslatedSet,
};
