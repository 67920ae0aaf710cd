//! Sifter - untranslated string finder for Go projects using go-i18n
//!
//! Sifter locates the translation function a Go codebase binds with
//! `T := i18n.MustTfunc(...)`, collects every string literal passed to it and
//! to `{{L10n "..."}}` template placeholders, and writes the strings missing
//! from a go-i18n catalog to `<catalog>.untranslated.json`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Discovery engine (parse, resolve alias, collect, diff, write)

pub mod cli;
pub mod config;
pub mod core;
