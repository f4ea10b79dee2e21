//! Read only node handles

use super::error::AstError;
use super::node_type::NodeType;
use super::traits::Visitor;
use super::tree::{Ast, Node, NodeId};
use std::fmt;

/// A node of an [Ast], borrowed for reading
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(ast: &'a Ast, id: NodeId) -> Self {
        Self { ast, id }
    }

    pub(crate) fn data(&self) -> &'a Node {
        self.ast.data(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn ast(&self) -> &'a Ast {
        self.ast
    }

    pub fn node_type(&self) -> NodeType {
        self.data().node_type()
    }

    pub fn attribute(&self, name: &str) -> Result<&'a str, AstError> {
        self.data().attribute(name)
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &'a str)> + 'a {
        self.data()
            .attributes()
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// The label attribute's value, e.g. a rule's name or a terminal's text
    pub fn label(&self) -> Option<&'a str> {
        self.node_type()
            .label_attribute()
            .and_then(|name| self.attribute(name).ok())
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + ExactSizeIterator + 'a {
        let ast = self.ast;
        self.data()
            .children()
            .iter()
            .map(move |id| NodeRef::new(ast, *id))
    }

    pub fn child_count(&self) -> usize {
        self.data().children().len()
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        self.data()
            .children()
            .get(index)
            .map(|id| NodeRef::new(self.ast, *id))
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent().map(|id| NodeRef::new(self.ast, id))
    }

    pub fn is_root(&self) -> bool {
        self.id == self.ast.root_id()
    }

    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    /// Position among the parent's children
    pub fn index_in_parent(&self) -> Option<usize> {
        self.parent()?
            .data()
            .children()
            .iter()
            .position(|id| *id == self.id)
    }

    /// 1 for a leaf, otherwise one more than the deepest child
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(*self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Depth-first, pre-order walk over this node and its descendants
    pub fn descendants(&self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().rev());
        }
        out
    }

    /// Visit this node, then its children left to right, then leave it
    ///
    /// The children are skipped when the visitor [drives the
    /// traversal](Visitor::drives_traversal) of this node itself.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_node(*self);
        if !visitor.drives_traversal(*self) {
            for child in self.children() {
                child.accept(visitor);
            }
        }
        visitor.leave_node(*self);
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ast, other.ast) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{}({:?})", self.node_type(), label),
            None => write!(f, "{}", self.node_type()),
        }
    }
}
