//! File parsers for source code and catalog files.
//!
//! This module provides parsers for different file types:
//! - `go`: Go source file parser (uses tree-sitter for syntax trees)
//! - `json`: go-i18n JSON catalog loader and writer
//! - `literal`: Go string literal unquoting shared by sources and templates

pub mod go;
pub mod json;
pub mod literal;
