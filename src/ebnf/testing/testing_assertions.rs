//! Fluent assertion API for AST nodes

use super::testing_matchers::TextMatch;
use crate::ebnf::ast::{Ast, NodeRef, NodeType};
use crate::ebnf::equivalence::probe_equivalence;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a tree
pub fn assert_ast(ast: &Ast) -> SyntaxAssertion<'_> {
    SyntaxAssertion { root: ast.root() }
}

/// Assert that two trees are structurally equivalent, reporting every divergence
pub fn assert_equivalent(actual: &Ast, expected: &Ast) {
    let result = probe_equivalence(actual.root(), expected.root());
    assert!(
        result.is_empty(),
        "Trees are not equivalent ({} mismatches):\n{}",
        result.len(),
        result.report()
    );
}

fn summarize_items(node: NodeRef<'_>) -> String {
    node.children()
        .map(|child| format!("{:?}", child))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Syntax Assertions
// ============================================================================

pub struct SyntaxAssertion<'a> {
    root: NodeRef<'a>,
}

impl<'a> SyntaxAssertion<'a> {
    /// Assert the grammar title
    pub fn title(self, expected: &str) -> Self {
        TextMatch::from(expected).assert(self.root.attribute("title").unwrap_or(""), "syntax:title");
        self
    }

    /// Assert the grammar meta attribute
    pub fn meta(self, expected: &str) -> Self {
        TextMatch::from(expected).assert(self.root.attribute("meta").unwrap_or(""), "syntax:meta");
        self
    }

    /// Assert the number of top level items, comments included
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.root.child_count();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_items(self.root)
        );
        self
    }

    /// Assert the number of rules
    pub fn rule_count(self, expected: usize) -> Self {
        let actual = self
            .root
            .children()
            .filter(|child| child.node_type() == NodeType::Rule)
            .count();
        assert_eq!(
            actual,
            expected,
            "Expected {} rules, found {} rules: [{}]",
            expected,
            actual,
            summarize_items(self.root)
        );
        self
    }

    /// Assert the types of all top level items, in order
    pub fn item_types(self, expected: &[NodeType]) -> Self {
        let actual: Vec<_> = self.root.children().map(|c| c.node_type()).collect();
        assert_eq!(actual, expected, "syntax: Unexpected item types");
        self
    }

    /// Assert on a specific top level item by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let item = self.root.child(index).unwrap_or_else(|| {
            panic!(
                "Item index {} out of bounds (syntax has {} items)",
                index,
                self.root.child_count()
            )
        });
        assertion(NodeAssertion {
            node: item,
            context: format!("items[{}]", index),
        });
        self
    }

    /// Assert on the first rule with the given name
    pub fn rule<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let (index, rule) = self
            .root
            .children()
            .enumerate()
            .find(|(_, child)| {
                child.node_type() == NodeType::Rule && child.attribute("name") == Ok(name)
            })
            .unwrap_or_else(|| {
                panic!(
                    "No rule named '{}' among: [{}]",
                    name,
                    summarize_items(self.root)
                )
            });
        assertion(NodeAssertion {
            node: rule,
            context: format!("items[{}]", index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: NodeRef<'a>,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn node(&self) -> NodeRef<'a> {
        self.node
    }

    pub fn node_type(self, expected: NodeType) -> Self {
        assert_eq!(
            self.node.node_type(),
            expected,
            "{}: Expected {} node, found {:?}",
            self.context,
            expected,
            self.node
        );
        self
    }

    fn labelled(self, node_type: NodeType, expected: &str) -> Self {
        let this = self.node_type(node_type);
        TextMatch::from(expected).assert(this.node.label().unwrap_or(""), &this.context);
        this
    }

    pub fn assert_rule(self, name: &str) -> Self {
        self.labelled(NodeType::Rule, name)
    }

    pub fn assert_identifier(self, value: &str) -> Self {
        self.labelled(NodeType::Identifier, value)
    }

    pub fn assert_terminal(self, value: &str) -> Self {
        self.labelled(NodeType::Terminal, value)
    }

    pub fn assert_comment(self, text: TextMatch) -> Self {
        let this = self.node_type(NodeType::Comment);
        text.assert(this.node.label().unwrap_or(""), &this.context);
        this
    }

    pub fn assert_sequence(self) -> Self {
        self.node_type(NodeType::Sequence)
    }

    pub fn assert_choice(self) -> Self {
        self.node_type(NodeType::Choice)
    }

    pub fn assert_optional(self) -> Self {
        self.node_type(NodeType::Optional)
    }

    pub fn assert_repetition(self) -> Self {
        self.node_type(NodeType::Repetition)
    }

    pub fn assert_group(self) -> Self {
        self.node_type(NodeType::Group)
    }

    pub fn assert_exception(self) -> Self {
        self.node_type(NodeType::Exception)
    }

    /// Assert an attribute value
    pub fn attribute(self, name: &str, expected: &str) -> Self {
        let actual = self
            .node
            .attribute(name)
            .unwrap_or_else(|err| panic!("{}: {}", self.context, err));
        TextMatch::from(expected).assert(actual, &format!("{}:{}", self.context, name));
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.child_count();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_items(self.node)
        );
        self
    }

    /// Assert the types of all children, in order
    pub fn child_types(self, expected: &[NodeType]) -> Self {
        let actual: Vec<_> = self.node.children().map(|c| c.node_type()).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected child types",
            self.context
        );
        self
    }

    pub fn depth(self, expected: usize) -> Self {
        assert_eq!(
            self.node.depth(),
            expected,
            "{}: Unexpected depth",
            self.context
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = self.node.child(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds (node has {} children)",
                self.context,
                index,
                self.node.child_count()
            )
        });
        assertion(NodeAssertion {
            node: child,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }

    /// Assert on a rule's expression: its first child after the name that is not a comment
    pub fn expression<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let this = self.node_type(NodeType::Rule);
        let (index, expression) = this
            .node
            .children()
            .enumerate()
            .skip(1)
            .find(|(_, child)| child.node_type() != NodeType::Comment)
            .unwrap_or_else(|| panic!("{}: Rule has no expression", this.context));
        assertion(NodeAssertion {
            node: expression,
            context: format!("{}:children[{}]", this.context, index),
        });
        this
    }
}
