//! Pass 1: Alias resolution.
//!
//! Finds the local identifier bound to the translation-function factory, e.g.
//! `T` in `T := i18n.MustTfunc("en-US")`. The name is not known in advance, so
//! the alias is matched by the structural shape of the assignment.

use crate::core::{
    Alias,
    parsers::go::{SourceTree, SyntaxNode},
};

/// The `<module>.<factory>(...)` call shape that binds the translation function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryPattern {
    pub module: String,
    pub names: Vec<String>,
}

impl Default for FactoryPattern {
    fn default() -> Self {
        Self {
            module: "i18n".to_string(),
            names: vec!["MustTfunc".to_string(), "Tfunc".to_string()],
        }
    }
}

impl FactoryPattern {
    pub fn new(module: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            module: module.into(),
            names,
        }
    }

    /// Check whether a callee is one of the factory selectors.
    pub fn matches(&self, callee: &SyntaxNode) -> bool {
        let SyntaxNode::Selector { operand, field, .. } = callee else {
            return false;
        };
        matches!(operand.as_ref(), SyntaxNode::Ident { name, .. } if *name == self.module)
            && self.names.iter().any(|n| n == field)
    }
}

/// Find the alias bound by the first factory-call assignment.
///
/// Trees are searched in the given order, each in pre-order, and the search
/// stops at the first match. Later matches anywhere in the corpus are ignored.
/// Returns `None` when no tree contains such an assignment.
pub fn resolve_alias(trees: &[SourceTree], factory: &FactoryPattern) -> Option<Alias> {
    trees.iter().find_map(|tree| {
        tree.root.pre_order().find_map(|node| {
            factory_binding(node, factory).map(|(name, line)| Alias::new(name, &tree.file_path, line))
        })
    })
}

/// Returns the bound name and line if `node` assigns a factory call result to
/// a simple identifier.
fn factory_binding<'a>(node: &'a SyntaxNode, factory: &FactoryPattern) -> Option<(&'a str, usize)> {
    let SyntaxNode::Assignment { lhs, rhs, line } = node else {
        return None;
    };

    // Only the first target names the function (`T, err := i18n.Tfunc(...)`).
    let SyntaxNode::Ident { name, .. } = lhs.first()? else {
        return None;
    };
    // The blank identifier can never be called.
    if name == "_" {
        return None;
    }

    let binds_factory = rhs.iter().any(
        |expr| matches!(expr, SyntaxNode::Call { callee, .. } if factory.matches(callee)),
    );
    binds_factory.then_some((name.as_str(), *line))
}
