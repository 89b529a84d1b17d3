//! Tagged syntax tree.

use std::fmt::Write;
use std::mem;

use lispy_stack::ensure_sufficient_stack;

use crate::Span;

/// What a [`SyntaxNode`] represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeTag {
    /// Root of a parsed input; an implicit S-expression over its children.
    Program,
    Number,
    Symbol,
    /// `( ... )`
    SExpr,
    /// `{ ... }`
    QExpr,
    /// A bracket token kept inside its group.
    Delimiter,
    /// Start or end of input marker under [`NodeTag::Program`].
    Anchor,
}

impl NodeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeTag::Program => "program",
            NodeTag::Number => "number",
            NodeTag::Symbol => "symbol",
            NodeTag::SExpr => "sexpr",
            NodeTag::QExpr => "qexpr",
            NodeTag::Delimiter => "delimiter",
            NodeTag::Anchor => "anchor",
        }
    }
}

/// One node of the syntax tree.
///
/// Leaves (`Number`, `Symbol`, `Delimiter`, `Anchor`) carry their source text
/// in `contents`; groups carry their children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub tag: NodeTag,
    pub contents: String,
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn leaf(tag: NodeTag, contents: impl Into<String>, span: Span) -> Self {
        SyntaxNode {
            tag,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    pub fn group(tag: NodeTag, span: Span, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode {
            tag,
            contents: String::new(),
            span,
            children,
        }
    }

    /// Whether this node is grammar scaffolding rather than program content.
    pub fn is_artifact(&self) -> bool {
        matches!(self.tag, NodeTag::Delimiter | NodeTag::Anchor)
    }

    /// Children that carry program content.
    pub fn content_children(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|child| !child.is_artifact())
    }

    /// Indented outline of the tree, one node per line.
    pub fn dump(&self) -> String {
        fn walk(node: &SyntaxNode, depth: usize, out: &mut String) {
            let _ = write!(out, "{:indent$}{}", "", node.tag.as_str(), indent = depth * 2);
            if node.contents.is_empty() {
                out.push('\n');
            } else {
                let _ = writeln!(out, " '{}'", node.contents);
            }
            ensure_sufficient_stack(|| {
                for child in &node.children {
                    walk(child, depth + 1, out);
                }
            });
        }

        let mut out = String::new();
        walk(self, 0, &mut out);
        out
    }
}

// Tear down nested groups with an explicit work list so dropping a deeply
// nested tree does not recurse once per level.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        if self.children.iter().all(|child| child.children.is_empty()) {
            return;
        }
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
