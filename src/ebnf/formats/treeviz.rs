//! Treeviz formatter for AST nodes
//!
//! Treeviz is a one line per node view of the tree, meant for quick scanning. Nesting is drawn
//! with box connectors, each line shows an icon for the node type and the node's label
//! (truncated).
//!
//! Example:
//!
//! ```text
//! ⧉ Grammar
//! ├─ ≔ digit
//! │ ├─ ◦ digit
//! │ └─ | 2 alternatives
//! │   ├─ " 0
//! │   └─ " 1
//! └─ ※ trailing note
//! ```
//!
//! Icons
//!     syntax: ⧉, rule: ≔, identifier: ◦, terminal: ", comment: ※
//!     sequence: ⋯, choice: |, optional: [], repetition: {}, group: (), exception: ∖

use super::registry::{FormatError, Formatter};
use crate::ebnf::ast::{Ast, NodeRef, NodeType};

/// Default label width before truncation
pub const DEFAULT_MAX_LABEL: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn icon(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Syntax => "⧉",
        NodeType::Rule => "≔",
        NodeType::Identifier => "◦",
        NodeType::Terminal => "\"",
        NodeType::Comment => "※",
        NodeType::Sequence => "⋯",
        NodeType::Choice => "|",
        NodeType::Optional => "[]",
        NodeType::Repetition => "{}",
        NodeType::Group => "()",
        NodeType::Exception => "∖",
    }
}

/// Label shown for a node: its own label, or a summary of its children
fn display_label(node: NodeRef<'_>) -> String {
    let label = node.label().unwrap_or_default();
    match node.node_type() {
        NodeType::Choice => format!("{} alternatives", node.child_count()),
        NodeType::Sequence => format!("{} terms", node.child_count()),
        NodeType::Syntax if label.is_empty() => "Grammar".to_string(),
        _ => label.replace('\n', " "),
    }
}

fn format_node(node: NodeRef<'_>, prefix: &str, is_last: bool, max_label: usize, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&display_label(node), max_label);

    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon(node.node_type()),
        label
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.child_count();
    for (i, child) in node.children().enumerate() {
        format_node(child, &child_prefix, i + 1 == child_count, max_label, output);
    }
}

pub fn to_treeviz_str(ast: &Ast) -> String {
    to_treeviz_str_with_width(ast, DEFAULT_MAX_LABEL)
}

pub fn to_treeviz_str_with_width(ast: &Ast, max_label: usize) -> String {
    let root = ast.root();
    let mut output = format!(
        "{} {}\n",
        icon(root.node_type()),
        truncate(&display_label(root), max_label)
    );

    let child_count = root.child_count();
    for (i, child) in root.children().enumerate() {
        format_node(child, "", i + 1 == child_count, max_label, &mut output);
    }
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter {
    pub max_label: usize,
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self {
            max_label: DEFAULT_MAX_LABEL,
        }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_width(ast, self.max_label))
    }

    fn description(&self) -> &str {
        "Visual tree representation with connectors and Unicode icons"
    }
}
