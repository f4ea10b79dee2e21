//! Property based tests for the parser and the tree it builds

use ebnf_parser::ebnf::ast::{Ast, NodeType};
use ebnf_parser::ebnf::equivalence::probe_equivalence;
use ebnf_parser::ebnf::formats::to_text;
use ebnf_parser::ebnf::parsing::parse_syntax;
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

fn terminal() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{0,5}".prop_map(|text| format!("\"{}\"", text))
}

/// Alternatives of comma or blank separated terms, some of them chained exceptions
fn expression(factor: BoxedStrategy<String>) -> BoxedStrategy<String> {
    let term = prop_oneof![
        3 => factor.clone(),
        1 => prop::collection::vec(factor, 2..5).prop_map(|operands| operands.join(" - ")),
    ];
    let sequence = (prop::collection::vec(term, 1..4), any::<bool>()).prop_map(|(terms, commas)| {
        terms.join(if commas { " , " } else { " " })
    });
    prop::collection::vec(sequence, 1..4)
        .prop_map(|alternatives| alternatives.join(" | "))
        .boxed()
}

fn factor() -> BoxedStrategy<String> {
    let leaf = prop_oneof![identifier(), terminal()];
    leaf.prop_recursive(3, 32, 4, |inner| {
        let body = expression(inner);
        prop_oneof![
            body.clone().prop_map(|e| format!("( {} )", e)),
            body.clone().prop_map(|e| format!("[ {} ]", e)),
            body.prop_map(|e| format!("{{ {} }}", e)),
        ]
    })
    .boxed()
}

fn grammar() -> impl Strategy<Value = String> {
    prop::collection::vec((identifier(), expression(factor())), 1..5).prop_map(|rules| {
        rules
            .into_iter()
            .map(|(name, body)| format!("{} = {} ;\n", name, body))
            .collect::<String>()
    })
}

fn parse(source: &str) -> Ast {
    parse_syntax(source).unwrap_or_else(|err| panic!("{}\n{}", err, source))
}

proptest! {
    #[test]
    fn test_generated_grammars_parse(source in grammar()) {
        let ast = parse(&source);
        let rules = source.lines().count();
        prop_assert_eq!(ast.root().child_count(), rules);
    }

    #[test]
    fn test_every_node_has_exactly_one_place(source in grammar()) {
        let ast = parse(&source);
        let nodes = ast.root().descendants();

        // No detached wrappers are left behind
        prop_assert_eq!(nodes.len(), ast.len());

        for node in nodes.iter().skip(1) {
            let parent = node.parent().expect("non-root node has a parent");
            let places = parent.children().filter(|child| child == node).count();
            prop_assert_eq!(places, 1);
        }
        prop_assert!(ast.root().parent().is_none());
    }

    #[test]
    fn test_leaves_and_wrappers(source in grammar()) {
        let ast = parse(&source);

        for node in ast.root().descendants() {
            match node.node_type() {
                NodeType::Identifier | NodeType::Terminal | NodeType::Comment => {
                    prop_assert!(node.is_leaf());
                    prop_assert_eq!(node.depth(), 1);
                }
                NodeType::Sequence | NodeType::Choice => {
                    prop_assert!(node.child_count() >= 2, "{:?} was not collapsed", node);
                }
                NodeType::Exception => {
                    prop_assert_eq!(node.child_count(), 2);
                }
                NodeType::Optional | NodeType::Repetition | NodeType::Group => {
                    prop_assert_eq!(node.child_count(), 1);
                }
                NodeType::Rule => {
                    prop_assert_eq!(node.child_count(), 2);
                    let name = node.child(0).expect("rule name");
                    prop_assert_eq!(name.node_type(), NodeType::Identifier);
                    prop_assert_eq!(name.label(), node.label());
                }
                NodeType::Syntax => {
                    prop_assert!(node.is_root());
                }
            }
        }
    }

    #[test]
    fn test_equivalence_is_reflexive(source in grammar()) {
        let ast = parse(&source);
        let again = parse(&source);

        prop_assert!(probe_equivalence(ast.root(), ast.root()).is_empty());
        prop_assert!(probe_equivalence(ast.root(), again.root()).is_empty());
        let copy = ast.deep_copy();
        prop_assert!(probe_equivalence(again.root(), copy.root()).is_empty());
    }

    #[test]
    fn test_exception_chains_lean_left(source in grammar()) {
        let ast = parse(&source);

        for node in ast.root().descendants() {
            if node.node_type() == NodeType::Exception {
                let excluded = node.child(1).expect("excluded operand");
                prop_assert_ne!(excluded.node_type(), NodeType::Exception);
            }
        }
    }

    #[test]
    fn test_text_has_one_line_per_node(source in grammar()) {
        let ast = parse(&source);
        let text = to_text(ast.root(), 4);
        prop_assert_eq!(text.lines().count(), ast.root().descendants().len());
    }

    #[test]
    fn test_arbitrary_input_does_not_panic(source in "\\PC{0,60}") {
        let _ = parse_syntax(&source);
    }
}
