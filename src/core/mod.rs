//! Core discovery engine.
//!
//! Sources are parsed once and traversed twice:
//!
//! 1. **Resolve** (`resolve`): find the alias bound to the translation factory.
//! 2. **Collect** (`collect`, `templates`): gather string literals passed to the
//!    alias in sources and to `L10n` placeholders in templates.
//!
//! The `diff` module then compares the discoveries with the catalog.

pub mod collect;
pub mod context;
pub mod data;
pub mod diff;
pub mod file_scanner;
pub mod parsers;
pub mod resolve;
pub mod templates;

pub use context::{Discovery, SiftContext, SiftResult, discover, parse_sources};
pub use data::*;
