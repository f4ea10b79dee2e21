//! The node arena
//!
//! An [Ast] owns every node created for it. Nodes reference each other by [NodeId]: children
//! are owned through the parent's child list, the parent link is a plain id.

use super::error::AstError;
use super::node_ref::NodeRef;
use super::node_type::NodeType;
use id_arena::Arena;

/// Meta attribute given to a syntax that does not declare one
pub const DEFAULT_META: &str = "xis/ebnf v2.0 http://wiki.karmin.ch/ebnf/ gpl3";

pub type NodeId = id_arena::Id<Node>;

/// Storage for a single node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_type: NodeType,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: Vec<(&'static str, String)>,
}

impl Node {
    fn new(node_type: NodeType) -> Self {
        let attributes = node_type
            .attribute_names()
            .iter()
            .map(|name| (*name, String::new()))
            .collect();
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
            attributes,
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Result<&str, AstError> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| self.missing(name))
    }

    fn set_attribute(&mut self, name: &str, value: String) -> Result<(), AstError> {
        let missing = self.missing(name);
        let slot = self
            .attributes
            .iter_mut()
            .find(|(key, _)| *key == name)
            .ok_or(missing)?;
        slot.1 = value;
        Ok(())
    }

    fn missing(&self, name: &str) -> AstError {
        AstError::MissingAttribute {
            node_type: self.node_type,
            name: name.to_string(),
        }
    }
}

/// A grammar syntax tree
#[derive(Debug)]
pub struct Ast {
    nodes: Arena<Node>,
    root: NodeId,
}

impl Ast {
    /// Create a tree holding only its `Syntax` root
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let mut root = Node::new(NodeType::Syntax);
        root.attributes[1].1 = DEFAULT_META.to_string();
        let root = nodes.alloc(root);
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.root)
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Handle to any node of this tree
    ///
    /// Panics if `id` belongs to a different tree.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(self, id)
    }

    pub(crate) fn data(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes allocated, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root].children.is_empty()
    }

    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    pub fn rule(&mut self, parent: Option<NodeId>, name: impl Into<String>) -> NodeId {
        self.alloc_with(NodeType::Rule, parent, name.into())
    }

    pub fn identifier(&mut self, parent: Option<NodeId>, value: impl Into<String>) -> NodeId {
        self.alloc_with(NodeType::Identifier, parent, value.into())
    }

    pub fn terminal(&mut self, parent: Option<NodeId>, value: impl Into<String>) -> NodeId {
        self.alloc_with(NodeType::Terminal, parent, value.into())
    }

    pub fn comment(&mut self, parent: Option<NodeId>, value: impl Into<String>) -> NodeId {
        self.alloc_with(NodeType::Comment, parent, value.into())
    }

    pub fn sequence(&mut self, parent: Option<NodeId>) -> NodeId {
        self.alloc(NodeType::Sequence, parent)
    }

    pub fn choice(&mut self, parent: Option<NodeId>) -> NodeId {
        self.alloc(NodeType::Choice, parent)
    }

    pub fn optional(&mut self, parent: Option<NodeId>) -> NodeId {
        self.alloc(NodeType::Optional, parent)
    }

    pub fn repetition(&mut self, parent: Option<NodeId>) -> NodeId {
        self.alloc(NodeType::Repetition, parent)
    }

    pub fn group(&mut self, parent: Option<NodeId>) -> NodeId {
        self.alloc(NodeType::Group, parent)
    }

    pub fn exception(&mut self, parent: Option<NodeId>) -> NodeId {
        self.alloc(NodeType::Exception, parent)
    }

    fn alloc(&mut self, node_type: NodeType, parent: Option<NodeId>) -> NodeId {
        let mut node = Node::new(node_type);
        node.parent = parent;
        let id = self.nodes.alloc(node);
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    /// Allocate a node whose single attribute is its label
    fn alloc_with(&mut self, node_type: NodeType, parent: Option<NodeId>, label: String) -> NodeId {
        let id = self.alloc(node_type, parent);
        self.nodes[id].attributes[0].1 = label;
        id
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn attribute(&self, id: NodeId, name: &str) -> Result<&str, AstError> {
        self.nodes[id].attribute(name)
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), AstError> {
        self.nodes[id].set_attribute(name, value.into())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.nodes[self.root].attributes[0].1 = title.into();
    }

    pub fn set_meta(&mut self, meta: impl Into<String>) {
        self.nodes[self.root].attributes[1].1 = meta.into();
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent`
    ///
    /// The child is first severed from its previous parent, if any.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), AstError> {
        if child == self.root {
            return Err(AstError::RootAttachment);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(AstError::CyclicAttachment {
                parent: self.nodes[parent].node_type,
                child: self.nodes[child].node_type,
            });
        }

        self.append(parent, child);
        Ok(())
    }

    /// [add_child](Ast::add_child) for nodes known not to be an ancestor of `parent`
    pub(crate) fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Sever `node` from its parent
    ///
    /// The subtree stays allocated but is no longer reachable from the root.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node].parent.take() {
            self.nodes[parent].children.retain(|id| *id != node);
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.nodes[id].parent;
        }
        false
    }

    // ------------------------------------------------------------------
    // Copies
    // ------------------------------------------------------------------

    /// Deep structural copy of the reachable tree
    pub fn deep_copy(&self) -> Ast {
        let mut copy = Ast::new();
        let root = copy.root;
        copy.nodes[root].attributes = self.nodes[self.root].attributes.clone();
        for child in self.root().children() {
            copy.copy_subtree(Some(root), child);
        }
        copy
    }

    /// Copy `source` and its descendants (from any tree) into this tree
    ///
    /// A syntax node is copied as its children: a tree has exactly one root.
    pub fn copy_subtree(&mut self, parent: Option<NodeId>, source: NodeRef<'_>) -> Option<NodeId> {
        if source.node_type() == NodeType::Syntax {
            for child in source.children() {
                self.copy_subtree(parent, child);
            }
            return None;
        }

        let id = self.alloc(source.node_type(), parent);
        self.nodes[id].attributes = source.data().attributes.clone();
        for child in source.children() {
            self.copy_subtree(Some(id), child);
        }
        Some(id)
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_syntax_root() {
        let ast = Ast::new();
        let root = ast.root();
        assert_eq!(root.node_type(), NodeType::Syntax);
        assert!(root.parent().is_none());
        assert_eq!(root.attribute("title"), Ok(""));
        assert_eq!(root.attribute("meta"), Ok(DEFAULT_META));
        assert!(ast.is_empty());
    }

    #[test]
    fn test_factories_attach_to_parent() {
        let mut ast = Ast::new();
        let rule = ast.rule(Some(ast.root_id()), "digit");
        let choice = ast.choice(Some(rule));
        let zero = ast.terminal(Some(choice), "0");

        assert_eq!(ast.node(rule).parent().map(|p| p.id()), Some(ast.root_id()));
        assert_eq!(ast.node(zero).parent().map(|p| p.id()), Some(choice));
        assert_eq!(ast.node(choice).child_count(), 1);
        assert_eq!(ast.attribute(rule, "name"), Ok("digit"));
    }

    #[test]
    fn test_detached_factories() {
        let mut ast = Ast::new();
        let terminal = ast.terminal(None, "x");
        assert!(ast.node(terminal).parent().is_none());
        assert!(ast.is_empty());
    }

    #[test]
    fn test_missing_attribute() {
        let mut ast = Ast::new();
        let choice = ast.choice(None);
        assert_eq!(
            ast.attribute(choice, "value"),
            Err(AstError::MissingAttribute {
                node_type: NodeType::Choice,
                name: "value".to_string()
            })
        );
        assert!(ast.set_attribute(choice, "value", "x").is_err());

        let terminal = ast.terminal(None, "x");
        ast.set_attribute(terminal, "value", "y").unwrap();
        assert_eq!(ast.attribute(terminal, "value"), Ok("y"));
    }

    #[test]
    fn test_add_child_reparents() {
        let mut ast = Ast::new();
        let first = ast.group(None);
        let second = ast.optional(None);
        let leaf = ast.identifier(Some(first), "a");

        ast.add_child(second, leaf).unwrap();

        assert_eq!(ast.node(first).child_count(), 0);
        assert_eq!(ast.node(second).child_count(), 1);
        assert_eq!(ast.node(leaf).parent().map(|p| p.id()), Some(second));
    }

    #[test]
    fn test_add_child_rejects_cycles() {
        let mut ast = Ast::new();
        let outer = ast.group(None);
        let inner = ast.group(Some(outer));

        assert_eq!(
            ast.add_child(inner, outer),
            Err(AstError::CyclicAttachment {
                parent: NodeType::Group,
                child: NodeType::Group
            })
        );
        assert!(ast.add_child(outer, outer).is_err());
        assert_eq!(
            ast.add_child(outer, ast.root_id()),
            Err(AstError::RootAttachment)
        );
    }

    #[test]
    fn test_detach() {
        let mut ast = Ast::new();
        let rule = ast.rule(Some(ast.root_id()), "a");
        ast.detach(rule);
        assert!(ast.is_empty());
        assert!(ast.node(rule).parent().is_none());
        // Detaching twice is a no-op
        ast.detach(rule);
    }

    #[test]
    fn test_deep_copy_skips_detached_nodes() {
        let mut ast = Ast::new();
        ast.set_attribute(ast.root_id(), "title", "t").unwrap();
        let rule = ast.rule(Some(ast.root_id()), "a");
        ast.identifier(Some(rule), "a");
        ast.terminal(None, "orphan");

        let copy = ast.deep_copy();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.root().attribute("title"), Ok("t"));
        let rule = copy.root().child(0).unwrap();
        assert_eq!(rule.attribute("name"), Ok("a"));
        assert_eq!(rule.child(0).unwrap().attribute("value"), Ok("a"));
    }
}
