//! Pass 2: String collection.
//!
//! With the alias known, every direct call through it is inspected and each
//! string-literal argument becomes a [`DiscoveredString`].

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::core::{
    Alias, DiscoveredString,
    parsers::{
        go::{SourceTree, SyntaxNode},
        literal::unquote,
    },
};

/// Collect the string-literal arguments of every `alias(...)` call.
///
/// Files are processed in parallel; the result keeps tree order, and within
/// a file pre-order, so the output is identical to a sequential walk.
pub fn collect_strings(trees: &[SourceTree], alias: &Alias) -> Result<Vec<DiscoveredString>> {
    let per_file: Vec<Result<Vec<DiscoveredString>>> = trees
        .par_iter()
        .map(|tree| collect_file_strings(tree, alias))
        .collect();

    let mut strings = Vec::new();
    for result in per_file {
        strings.extend(result?);
    }
    Ok(strings)
}

/// Collect alias-call strings from a single file.
///
/// Only unqualified calls count: `T("x")` matches, `ctx.T("x")` does not.
/// Arguments that are not string literals are skipped.
pub fn collect_file_strings(tree: &SourceTree, alias: &Alias) -> Result<Vec<DiscoveredString>> {
    let mut strings = Vec::new();

    for node in tree.root.pre_order() {
        let SyntaxNode::Call { callee, args, .. } = node else {
            continue;
        };
        if !is_alias_call(callee, alias) {
            continue;
        }

        for arg in args {
            if let SyntaxNode::StringLit { raw, line } = arg {
                let text = unquote(raw)
                    .with_context(|| format!("{}:{}", tree.file_path, line))?;
                strings.push(DiscoveredString::new(text, &tree.file_path, *line));
            }
        }
    }

    Ok(strings)
}

fn is_alias_call(callee: &SyntaxNode, alias: &Alias) -> bool {
    matches!(callee, SyntaxNode::Ident { name, .. } if name == alias.name())
}
