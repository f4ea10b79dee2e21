//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! This module provides a canonical, format-agnostic representation of the AST
//! suitable for serialization to any output format (JSON, YAML, treeviz, ...).
//!
//! The snapshot captures the complete tree structure with node types, labels,
//! attributes, and children. Serializers that do not need to walk the arena
//! themselves should consume `snapshot_from_ast()` or `snapshot_from_node()`.

use super::node_ref::NodeRef;
use super::tree::Ast;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The tag of the node (e.g., "rule", "terminal", "choice")
    pub node_type: String,

    /// The label attribute of the node, empty for combinators
    pub label: String,

    /// Every attribute of the node, the label included
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    /// Create a new snapshot with the given node type and label
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute to this snapshot
    pub fn with_attribute(mut self, key: String, value: String) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Add a child snapshot
    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Number of snapshots in this subtree
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(AstSnapshot::count).sum::<usize>()
    }
}

/// Create a snapshot of a node and all its descendants
pub fn snapshot_from_node(node: NodeRef<'_>) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new(
        node.node_type().to_string(),
        node.label().unwrap_or_default().to_string(),
    );
    for (name, value) in node.attributes() {
        snapshot = snapshot.with_attribute(name.to_string(), value.to_string());
    }
    for child in node.children() {
        snapshot.children.push(snapshot_from_node(child));
    }
    snapshot
}

/// Snapshot of the whole tree, starting at its `syntax` root
pub fn snapshot_from_ast(ast: &Ast) -> AstSnapshot {
    snapshot_from_node(ast.root())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_empty_tree() {
        let ast = Ast::new();
        let snapshot = snapshot_from_ast(&ast);

        assert_eq!(snapshot.node_type, "syntax");
        assert_eq!(snapshot.label, "");
        assert_eq!(snapshot.attributes.len(), 2);
        assert!(snapshot.children.is_empty());
    }

    #[test]
    fn test_snapshot_preserves_structure() {
        let mut ast = Ast::new();
        let rule = ast.rule(Some(ast.root_id()), "list");
        ast.identifier(Some(rule), "list");
        let repetition = ast.repetition(Some(rule));
        ast.terminal(Some(repetition), ",");

        let snapshot = snapshot_from_ast(&ast);
        assert_eq!(snapshot.count(), 5);

        let rule = &snapshot.children[0];
        assert_eq!(rule.node_type, "rule");
        assert_eq!(rule.label, "list");
        assert_eq!(rule.attributes.get("name").map(String::as_str), Some("list"));

        let repetition = &rule.children[1];
        assert_eq!(repetition.node_type, "repetition");
        assert_eq!(repetition.label, "");
        assert!(repetition.attributes.is_empty());
        assert_eq!(repetition.children[0].label, ",");
    }

    #[test]
    fn test_snapshot_of_detached_node() {
        let mut ast = Ast::new();
        let group = ast.group(None);
        ast.identifier(Some(group), "a");

        let snapshot = snapshot_from_node(ast.node(group));
        assert_eq!(
            snapshot,
            AstSnapshot::new("group".to_string(), String::new()).with_child(
                AstSnapshot::new("identifier".to_string(), "a".to_string())
                    .with_attribute("value".to_string(), "a".to_string())
            )
        );
    }
}
