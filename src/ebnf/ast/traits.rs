//! AST traits - The visitor contract
//!
//! Renderers walk a tree through [Visitor]. The tree calls `visit_*` when it enters a node and
//! `leave_*` once all of the node's children were visited. Both go through
//! [visit_node](Visitor::visit_node) and [leave_node](Visitor::leave_node), which visitors
//! treating every node alike override instead.

use super::node_ref::NodeRef;
use super::node_type::NodeType;

/// Visitor trait for traversing the AST
///
/// Implement this trait to walk the AST. Each method corresponds to a node type. Default
/// implementations are empty, so you only need to override the methods you care about.
///
/// # Example
///
/// ```ignore
/// struct RuleNames(Vec<String>);
///
/// impl Visitor for RuleNames {
///     fn visit_rule(&mut self, rule: NodeRef<'_>) {
///         self.0.push(rule.label().unwrap_or_default().to_string());
///     }
/// }
///
/// let mut names = RuleNames(Vec::new());
/// ast.root().accept(&mut names);
/// ```
pub trait Visitor {
    /// Entry point for every node; dispatches to the typed `visit_*` method
    ///
    /// Override to handle all node types uniformly.
    fn visit_node(&mut self, node: NodeRef<'_>) {
        match node.node_type() {
            NodeType::Syntax => self.visit_syntax(node),
            NodeType::Rule => self.visit_rule(node),
            NodeType::Identifier => self.visit_identifier(node),
            NodeType::Terminal => self.visit_terminal(node),
            NodeType::Comment => self.visit_comment(node),
            NodeType::Sequence => self.visit_sequence(node),
            NodeType::Choice => self.visit_choice(node),
            NodeType::Optional => self.visit_optional(node),
            NodeType::Repetition => self.visit_repetition(node),
            NodeType::Group => self.visit_group(node),
            NodeType::Exception => self.visit_exception(node),
        }
    }

    /// Called once all children of `node` were visited; dispatches to `leave_*`
    fn leave_node(&mut self, node: NodeRef<'_>) {
        match node.node_type() {
            NodeType::Syntax => self.leave_syntax(node),
            NodeType::Rule => self.leave_rule(node),
            NodeType::Identifier => self.leave_identifier(node),
            NodeType::Terminal => self.leave_terminal(node),
            NodeType::Comment => self.leave_comment(node),
            NodeType::Sequence => self.leave_sequence(node),
            NodeType::Choice => self.leave_choice(node),
            NodeType::Optional => self.leave_optional(node),
            NodeType::Repetition => self.leave_repetition(node),
            NodeType::Group => self.leave_group(node),
            NodeType::Exception => self.leave_exception(node),
        }
    }

    /// Whether this visitor walks the children of `node` itself
    ///
    /// When it does, [NodeRef::accept] only calls the visit and leave hooks for `node` and
    /// leaves the descent to the visitor, typically through [visit_children] from the matching
    /// `visit_*` method.
    fn drives_traversal(&self, _node: NodeRef<'_>) -> bool {
        false
    }

    fn visit_syntax(&mut self, _syntax: NodeRef<'_>) {}
    fn leave_syntax(&mut self, _syntax: NodeRef<'_>) {}
    fn visit_rule(&mut self, _rule: NodeRef<'_>) {}
    fn leave_rule(&mut self, _rule: NodeRef<'_>) {}

    // Leaf nodes
    fn visit_identifier(&mut self, _identifier: NodeRef<'_>) {}
    fn leave_identifier(&mut self, _identifier: NodeRef<'_>) {}
    fn visit_terminal(&mut self, _terminal: NodeRef<'_>) {}
    fn leave_terminal(&mut self, _terminal: NodeRef<'_>) {}
    fn visit_comment(&mut self, _comment: NodeRef<'_>) {}
    fn leave_comment(&mut self, _comment: NodeRef<'_>) {}

    // Combinators
    fn visit_sequence(&mut self, _sequence: NodeRef<'_>) {}
    fn leave_sequence(&mut self, _sequence: NodeRef<'_>) {}
    fn visit_choice(&mut self, _choice: NodeRef<'_>) {}
    fn leave_choice(&mut self, _choice: NodeRef<'_>) {}
    fn visit_optional(&mut self, _optional: NodeRef<'_>) {}
    fn leave_optional(&mut self, _optional: NodeRef<'_>) {}
    fn visit_repetition(&mut self, _repetition: NodeRef<'_>) {}
    fn leave_repetition(&mut self, _repetition: NodeRef<'_>) {}
    fn visit_group(&mut self, _group: NodeRef<'_>) {}
    fn leave_group(&mut self, _group: NodeRef<'_>) {}
    fn visit_exception(&mut self, _exception: NodeRef<'_>) {}
    fn leave_exception(&mut self, _exception: NodeRef<'_>) {}
}

/// Accept `visitor` on every child of `node`, left to right
///
/// For visitors that drive the traversal themselves, see [Visitor::drives_traversal].
pub fn visit_children(visitor: &mut dyn Visitor, node: NodeRef<'_>) {
    for child in node.children() {
        child.accept(visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tree::Ast;
    use super::*;

    #[test]
    fn test_visitor_traversal() {
        // syntax > rule > (identifier, choice > (terminal, terminal))
        let mut ast = Ast::new();
        let rule = ast.rule(Some(ast.root_id()), "digit");
        ast.identifier(Some(rule), "digit");
        let choice = ast.choice(Some(rule));
        ast.terminal(Some(choice), "0");
        ast.terminal(Some(choice), "1");

        #[derive(Default)]
        struct CountingVisitor {
            events: Vec<String>,
            terminals: usize,
        }

        impl Visitor for CountingVisitor {
            fn visit_rule(&mut self, rule: NodeRef<'_>) {
                self.events.push(format!("enter {}", rule.label().unwrap_or("")));
            }
            fn leave_rule(&mut self, rule: NodeRef<'_>) {
                self.events.push(format!("leave {}", rule.label().unwrap_or("")));
            }
            fn visit_choice(&mut self, _: NodeRef<'_>) {
                self.events.push("choice".to_string());
            }
            fn visit_terminal(&mut self, terminal: NodeRef<'_>) {
                self.terminals += 1;
                self.events
                    .push(format!("terminal {}", terminal.label().unwrap_or("")));
            }
        }

        let mut visitor = CountingVisitor::default();
        ast.root().accept(&mut visitor);

        assert_eq!(visitor.terminals, 2);
        assert_eq!(
            visitor.events,
            vec![
                "enter digit",
                "choice",
                "terminal 0",
                "terminal 1",
                "leave digit"
            ]
        );

        // Visiting a subtree only reaches that subtree
        let mut visitor = CountingVisitor::default();
        visit_children(&mut visitor, ast.node(choice));
        assert_eq!(visitor.events, vec!["terminal 0", "terminal 1"]);
    }

    #[test]
    fn test_visitor_driving_its_own_descent() {
        let mut ast = Ast::new();
        let rule = ast.rule(Some(ast.root_id()), "d");
        ast.identifier(Some(rule), "d");
        let choice = ast.choice(Some(rule));
        ast.terminal(Some(choice), "0");
        ast.terminal(Some(choice), "1");

        /// Walks alternatives last to first
        #[derive(Default)]
        struct Reversed {
            events: Vec<String>,
        }

        impl Visitor for Reversed {
            fn drives_traversal(&self, node: NodeRef<'_>) -> bool {
                node.node_type() == NodeType::Choice
            }
            fn visit_choice(&mut self, choice: NodeRef<'_>) {
                self.events.push("choice".to_string());
                for child in choice.children().rev() {
                    child.accept(self);
                }
            }
            fn leave_choice(&mut self, _: NodeRef<'_>) {
                self.events.push("/choice".to_string());
            }
            fn visit_terminal(&mut self, terminal: NodeRef<'_>) {
                self.events.push(terminal.label().unwrap_or("").to_string());
            }
        }

        let mut visitor = Reversed::default();
        ast.root().accept(&mut visitor);
        assert_eq!(visitor.events, vec!["choice", "1", "0", "/choice"]);

        #[derive(Default)]
        struct Explicit {
            events: Vec<String>,
        }

        impl Visitor for Explicit {
            fn drives_traversal(&self, node: NodeRef<'_>) -> bool {
                node.node_type() == NodeType::Choice
            }
            fn visit_choice(&mut self, choice: NodeRef<'_>) {
                self.events.push("choice".to_string());
                visit_children(self, choice);
            }
            fn visit_terminal(&mut self, terminal: NodeRef<'_>) {
                self.events.push(terminal.label().unwrap_or("").to_string());
            }
        }

        let mut visitor = Explicit::default();
        ast.root().accept(&mut visitor);
        assert_eq!(visitor.events, vec!["choice", "0", "1"]);
    }
}
