//! Plain text syntax tree
//!
//! One line per node, in document order, each indented by its nesting level:
//!
//! ```text
//! [syntax title='' meta='xis/ebnf v2.0 http://wiki.karmin.ch/ebnf/ gpl3']
//!     [rule name='digit']
//!         [identifier value='digit']
//!         [choice]
//!             [terminal value='0']
//!             [terminal value='1']
//! ```
//!
//! Attributes are listed in declaration order. Line breaks inside a value are written as `\n`
//! so every node stays on its own line.

use super::registry::{FormatError, Formatter};
use crate::ebnf::ast::{Ast, NodeRef, Visitor};

/// Spaces per nesting level
pub const DEFAULT_INDENTATION: usize = 4;

/// Visitor rendering the text syntax tree
pub struct TextSyntaxTree {
    text: String,
    level: usize,
    indentation: usize,
}

impl TextSyntaxTree {
    pub fn new() -> Self {
        Self::with_indentation(DEFAULT_INDENTATION)
    }

    pub fn with_indentation(indentation: usize) -> Self {
        Self {
            text: String::new(),
            level: 0,
            indentation,
        }
    }

    /// The text rendered so far
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Default for TextSyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for TextSyntaxTree {
    fn visit_node(&mut self, node: NodeRef<'_>) {
        self.text
            .push_str(&" ".repeat(self.level * self.indentation));
        self.text.push('[');
        self.text.push_str(node.node_type().as_str());
        for (name, value) in node.attributes() {
            self.text.push_str(&format!(" {}='{}'", name, escape_line(value)));
        }
        self.text.push_str("]\n");
        self.level += 1;
    }

    fn leave_node(&mut self, _node: NodeRef<'_>) {
        self.level = self.level.saturating_sub(1);
    }
}

fn escape_line(value: &str) -> String {
    value.replace('\r', "\\r").replace('\n', "\\n")
}

/// Render a node and its subtree
pub fn to_text(node: NodeRef<'_>, indentation: usize) -> String {
    let mut visitor = TextSyntaxTree::with_indentation(indentation);
    node.accept(&mut visitor);
    visitor.into_text()
}

/// Formatter implementation for the text syntax tree
pub struct TextFormatter {
    pub indentation: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            indentation: DEFAULT_INDENTATION,
        }
    }
}

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
        Ok(to_text(ast.root(), self.indentation))
    }

    fn description(&self) -> &str {
        "Indented text syntax tree, one bracketed line per node"
    }
}
