use std::{fs, mem, path::Path};

use anyhow::{Context, Result, anyhow, bail};
use tree_sitter::{Language, Node, Parser};

/// Lowered Go syntax tree.
///
/// Only the node kinds the discovery passes consult get their own variant.
/// Everything else becomes `Other`, which keeps its lowered named children so
/// a pre-order walk still sees every assignment, call and literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// `a := f()` or `a = f()`.
    Assignment {
        lhs: Vec<SyntaxNode>,
        rhs: Vec<SyntaxNode>,
        line: usize,
    },
    Call {
        callee: Box<SyntaxNode>,
        args: Vec<SyntaxNode>,
        line: usize,
    },
    Ident {
        name: String,
        line: usize,
    },
    /// `operand.field`, e.g. `i18n.MustTfunc`.
    Selector {
        operand: Box<SyntaxNode>,
        field: String,
        line: usize,
    },
    /// A string literal exactly as written, quotes included.
    StringLit {
        raw: String,
        line: usize,
    },
    Other {
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    /// Iterate over this node and all of its descendants in pre-order.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    fn leaf() -> Self {
        SyntaxNode::Other {
            children: Vec::new(),
        }
    }

    /// Move all direct children into `out`, leaving this node childless.
    fn take_children(&mut self, out: &mut Vec<SyntaxNode>) {
        match self {
            SyntaxNode::Assignment { lhs, rhs, .. } => {
                out.append(lhs);
                out.append(rhs);
            }
            SyntaxNode::Call { callee, args, .. } => {
                out.push(mem::replace(callee.as_mut(), SyntaxNode::leaf()));
                out.append(args);
            }
            SyntaxNode::Selector { operand, .. } => {
                out.push(mem::replace(operand.as_mut(), SyntaxNode::leaf()));
            }
            SyntaxNode::Other { children } => out.append(children),
            SyntaxNode::Ident { .. } | SyntaxNode::StringLit { .. } => {}
        }
    }
}

// Nested Box/Vec drops would recurse once per level.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.take_children(&mut stack);
        }
    }
}

/// Pre-order iterator over a [`SyntaxNode`] tree.
///
/// Uses an explicit stack so deeply nested sources cannot overflow the call stack.
pub struct PreOrder<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children are pushed in reverse so the leftmost one is visited first.
        match node {
            SyntaxNode::Assignment { lhs, rhs, .. } => {
                self.stack.extend(rhs.iter().rev());
                self.stack.extend(lhs.iter().rev());
            }
            SyntaxNode::Call { callee, args, .. } => {
                self.stack.extend(args.iter().rev());
                self.stack.push(callee);
            }
            SyntaxNode::Selector { operand, .. } => self.stack.push(operand),
            SyntaxNode::Other { children } => self.stack.extend(children.iter().rev()),
            SyntaxNode::Ident { .. } | SyntaxNode::StringLit { .. } => {}
        }
        Some(node)
    }
}

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    pub file_path: String,
    pub root: SyntaxNode,
}

/// Read and parse a Go source file.
pub fn parse_go_file(path: impl AsRef<Path>) -> Result<SourceTree> {
    let path = path.as_ref();
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    parse_go_source(&code, &path.to_string_lossy())
}

/// Parse Go source code into a lowered [`SourceTree`].
///
/// Any syntax error makes the whole file fail; the error names the file and
/// the position of the first offending node.
pub fn parse_go_source(code: &str, file_path: &str) -> Result<SourceTree> {
    let language: Language = tree_sitter_go::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .context("Failed to load the Go grammar")?;

    let tree = parser
        .parse(code, None)
        .ok_or_else(|| anyhow!("Failed to parse {}: parser produced no tree", file_path))?;

    let root = tree.root_node();
    if root.has_error() {
        let (line, col) = first_error(root)
            .map(|node| {
                let pos = node.start_position();
                (pos.row + 1, pos.column + 1)
            })
            .unwrap_or((1, 1));
        bail!("Failed to parse {}: syntax error at {}:{}", file_path, line, col);
    }

    let root = lower(root, code.as_bytes())
        .with_context(|| format!("Failed to parse {}", file_path))?;

    Ok(SourceTree {
        file_path: file_path.to_string(),
        root,
    })
}

/// Find the first error or missing node in document order.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// How a tree-sitter node is rebuilt once its children are lowered.
enum Shape {
    Assignment { lhs_len: usize, line: usize },
    Call { line: usize },
    Selector { field: String, line: usize },
    Other,
}

/// A node whose children are being lowered.
struct Frame<'t> {
    shape: Shape,
    /// Children still to lower, last one first.
    pending: Vec<Node<'t>>,
    lowered: Vec<SyntaxNode>,
}

impl Frame<'_> {
    fn finish(self) -> SyntaxNode {
        let mut lowered = self.lowered;
        match self.shape {
            Shape::Assignment { lhs_len, line } => {
                let rhs = lowered.split_off(lhs_len);
                SyntaxNode::Assignment {
                    lhs: lowered,
                    rhs,
                    line,
                }
            }
            Shape::Call { line } => {
                let mut children = lowered.into_iter();
                match children.next() {
                    Some(callee) => SyntaxNode::Call {
                        callee: Box::new(callee),
                        args: children.collect(),
                        line,
                    },
                    None => SyntaxNode::leaf(),
                }
            }
            Shape::Selector { field, line } => match lowered.pop() {
                Some(operand) => SyntaxNode::Selector {
                    operand: Box::new(operand),
                    field,
                    line,
                },
                None => SyntaxNode::leaf(),
            },
            Shape::Other => SyntaxNode::Other { children: lowered },
        }
    }
}

/// Result of inspecting one tree-sitter node.
enum Step<'t> {
    Leaf(SyntaxNode),
    Open(Frame<'t>),
}

/// Lower a tree-sitter tree with an explicit work stack.
fn lower(root: Node<'_>, source: &[u8]) -> Result<SyntaxNode> {
    let mut stack: Vec<Frame<'_>> = Vec::new();
    let mut next = Some(root);

    loop {
        if let Some(node) = next.take() {
            match step(node, source)? {
                Step::Leaf(leaf) => match stack.last_mut() {
                    Some(parent) => parent.lowered.push(leaf),
                    None => return Ok(leaf),
                },
                Step::Open(frame) => stack.push(frame),
            }
        }

        let Some(frame) = stack.last_mut() else {
            bail!("syntax tree ended unexpectedly");
        };
        if let Some(child) = frame.pending.pop() {
            next = Some(child);
            continue;
        }

        let Some(frame) = stack.pop() else {
            bail!("syntax tree ended unexpectedly");
        };
        let node = frame.finish();
        match stack.last_mut() {
            Some(parent) => parent.lowered.push(node),
            None => return Ok(node),
        }
    }
}

fn step<'t>(node: Node<'t>, source: &[u8]) -> Result<Step<'t>> {
    let line = node.start_position().row + 1;

    let (shape, children) = match node.kind() {
        "short_var_declaration" | "assignment_statement" => {
            let mut children = field_children(node, "left");
            let lhs_len = children.len();
            children.extend(field_children(node, "right"));
            (Shape::Assignment { lhs_len, line }, children)
        }
        "call_expression" => match node.child_by_field_name("function") {
            Some(function) => {
                let mut children = vec![function];
                children.extend(field_children(node, "arguments"));
                (Shape::Call { line }, children)
            }
            None => (Shape::Other, named_children(node)),
        },
        "selector_expression" => match (
            node.child_by_field_name("operand"),
            node.child_by_field_name("field"),
        ) {
            (Some(operand), Some(field)) => (
                Shape::Selector {
                    field: field.utf8_text(source)?.to_string(),
                    line,
                },
                vec![operand],
            ),
            _ => (Shape::Other, named_children(node)),
        },
        "identifier" => {
            return Ok(Step::Leaf(SyntaxNode::Ident {
                name: node.utf8_text(source)?.to_string(),
                line,
            }));
        }
        "interpreted_string_literal" | "raw_string_literal" => {
            return Ok(Step::Leaf(SyntaxNode::StringLit {
                raw: node.utf8_text(source)?.to_string(),
                line,
            }));
        }
        _ => (Shape::Other, named_children(node)),
    };

    let mut pending = children;
    pending.reverse();
    Ok(Step::Open(Frame {
        shape,
        lowered: Vec::with_capacity(pending.len()),
        pending,
    }))
}

/// Named children of a list-valued field (expression or argument list).
fn field_children<'t>(node: Node<'t>, field: &str) -> Vec<Node<'t>> {
    match node.child_by_field_name(field) {
        Some(list) => named_children(list),
        None => Vec::new(),
    }
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}
