//! Structural comparison of two trees
//!
//! [probe_equivalence] walks two trees in lockstep and records every divergence in a
//! [Notification] instead of stopping at the first one, so a single run shows the whole diff.
//!
//! For each pair of nodes:
//!
//! 1. Different node types are recorded and the pair is not descended into.
//! 2. Attributes are compared one by one; each differing value is recorded.
//! 3. A differing child count is recorded, then the children are compared pairwise up to the
//!    shorter count.
//!
//! Each record carries the path of both nodes, e.g. `syntax/rule[0]/choice[1]`.

use crate::ebnf::ast::NodeRef;
use serde::Serialize;
use std::fmt;

/// One divergence between two trees
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub message: String,
    /// Path of the node in the first tree
    pub context_a: String,
    /// Path of the node in the second tree
    pub context_b: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context_a == self.context_b {
            write!(f, "{} (at {})", self.message, self.context_a)
        } else {
            write!(
                f,
                "{} (at {} / {})",
                self.message, self.context_a, self.context_b
            )
        }
    }
}

/// Accumulates the mismatches found by [probe_equivalence]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    errors: Vec<Mismatch>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(
        &mut self,
        message: impl Into<String>,
        context_a: impl Into<String>,
        context_b: impl Into<String>,
    ) {
        self.errors.push(Mismatch {
            message: message.into(),
            context_a: context_a.into(),
            context_b: context_b.into(),
        });
    }

    /// True when the trees were found equivalent
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[Mismatch] {
        &self.errors
    }

    /// One line per mismatch
    pub fn report(&self) -> String {
        self.errors
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Append the records of another notification
    pub fn merge(&mut self, other: Notification) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}

/// Compare two (sub)trees, which may belong to different [Ast](crate::ebnf::ast::Ast)s
pub fn probe_equivalence(a: NodeRef<'_>, b: NodeRef<'_>) -> Notification {
    let mut result = Notification::new();
    let path_a = a.node_type().to_string();
    let path_b = b.node_type().to_string();
    probe(a, b, &path_a, &path_b, &mut result);
    result
}

fn probe(a: NodeRef<'_>, b: NodeRef<'_>, path_a: &str, path_b: &str, result: &mut Notification) {
    if a.node_type() != b.node_type() {
        result.error(
            format!(
                "Probed node types mismatch: '{}' != '{}'!",
                a.node_type(),
                b.node_type()
            ),
            path_a,
            path_b,
        );
        return;
    }

    for ((name, value_a), (_, value_b)) in a.attributes().zip(b.attributes()) {
        if value_a != value_b {
            result.error(
                format!(
                    "{} {} mismatch: '{}' != '{}'!",
                    capitalized(a.node_type().as_str()),
                    name,
                    value_a,
                    value_b
                ),
                path_a,
                path_b,
            );
        }
    }

    if a.child_count() != b.child_count() {
        result.error(
            format!(
                "Node has different child count: {} != {}!",
                a.child_count(),
                b.child_count()
            ),
            path_a,
            path_b,
        );
    }

    for (index, (child_a, child_b)) in a.children().zip(b.children()).enumerate() {
        let child_path_a = format!("{}/{}[{}]", path_a, child_a.node_type(), index);
        let child_path_b = format!("{}/{}[{}]", path_b, child_b.node_type(), index);
        probe(child_a, child_b, &child_path_a, &child_path_b, result);
    }
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ebnf::ast::Ast;
    use crate::ebnf::parsing::parse_syntax;

    #[test]
    fn test_tree_is_equivalent_to_itself() {
        let ast = parse_syntax("digit = \"0\" | \"1\" ;").unwrap();
        assert!(probe_equivalence(ast.root(), ast.root()).is_empty());
        assert!(probe_equivalence(ast.root(), ast.deep_copy().root()).is_empty());
    }

    #[test]
    fn test_type_mismatch_stops_descent() {
        let a = parse_syntax("a = b | c ;").unwrap();
        let b = parse_syntax("a = [ b | d ] ;").unwrap();

        let result = probe_equivalence(a.root(), b.root());
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.errors()[0],
            Mismatch {
                message: "Probed node types mismatch: 'choice' != 'optional'!".to_string(),
                context_a: "syntax/rule[0]/choice[1]".to_string(),
                context_b: "syntax/rule[0]/optional[1]".to_string(),
            }
        );
    }

    #[test]
    fn test_collects_every_divergence() {
        let a = parse_syntax("a = \"x\" ; b = c ;").unwrap();
        let b = parse_syntax("a = \"y\" ; b = d ;").unwrap();

        let result = probe_equivalence(a.root(), b.root());
        let messages: Vec<_> = result.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Terminal value mismatch: 'x' != 'y'!",
                "Identifier value mismatch: 'c' != 'd'!",
            ]
        );
        assert_eq!(result.errors()[1].context_a, "syntax/rule[1]/identifier[1]");
    }

    #[test]
    fn test_child_count_mismatch_continues_pairwise() {
        let a = parse_syntax("a = b , c , d ;").unwrap();
        let b = parse_syntax("a = b , e ;").unwrap();

        let result = probe_equivalence(a.root(), b.root());
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.errors()[0].message,
            "Node has different child count: 3 != 2!"
        );
        assert_eq!(
            result.errors()[1].message,
            "Identifier value mismatch: 'c' != 'e'!"
        );
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut first = Notification::new();
        first.error("one", "syntax", "syntax");
        let mut second = Notification::new();
        second.error("two", "syntax/rule[0]", "syntax/rule[1]");

        first.merge(second);
        assert_eq!(first.len(), 2);
        assert_eq!(
            first.report(),
            "one (at syntax)\ntwo (at syntax/rule[0] / syntax/rule[1])"
        );
    }

    #[test]
    fn test_syntax_attributes_are_compared() {
        let a = Ast::new();
        let mut b = Ast::new();
        b.set_title("Other");

        let result = probe_equivalence(a.root(), b.root());
        assert_eq!(
            result.to_string(),
            "Syntax title mismatch: '' != 'Other'! (at syntax)"
        );
    }
}
