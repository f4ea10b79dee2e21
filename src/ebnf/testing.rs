//! Testing utilities for AST assertions
//!
//! # Parser Testing Guidelines
//!
//! 1. Prefer the verified grammars in `docs/samples/` through [EbnfSources] over grammar text
//!    written inline, unless the test is about one specific construct.
//!
//! 2. Verify trees with [assert_ast](fn@assert_ast). Asserting node counts alone says little:
//!    what matters is the tree shape and the attribute values.
//!
//! ```rust-example
//! use ebnf_parser::ebnf::testing::{assert_ast, EbnfSources};
//!
//! let ast = EbnfSources::parse("010-digits.ebnf")?;
//!
//! assert_ast(&ast)
//!     .rule_count(2)
//!     .rule("digit", |rule| {
//!         rule.expression(|expr| {
//!             expr.assert_choice()
//!                 .child_count(10)
//!                 .child(0, |first| {
//!                     first.assert_terminal("0");
//!                 });
//!         });
//!     });
//! ```
//!
//! Failure messages name the node by its path, e.g. `items[2]:children[1]:children[0]`.
//!
//! 3. To compare against a tree built by hand, or between two parses, use
//!    [assert_equivalent], which lists every divergence in one run.

mod samples;
mod testing_assertions;
mod testing_matchers;

pub use samples::EbnfSources;
pub use testing_assertions::{assert_ast, assert_equivalent, NodeAssertion, SyntaxAssertion};
pub use testing_matchers::TextMatch;
