//! # ebnf-parser
//!
//! Reads EBNF grammar definitions and builds a syntax tree of their structure.
//!
//! File Layout
//!
//!     Everything lives under the [ebnf] module, split by pipeline stage:
//!
//!     src/ebnf
//!       ├── token        Token values handed from the lexer to the parser
//!       ├── lexing       logos based scanner producing tokens one at a time
//!       ├── parsing      Recursive descent parser building the tree
//!       ├── ast          Arena backed node model, visitor contract, snapshots
//!       ├── equivalence  Node by node comparison of two trees
//!       ├── formats      Text, tree, xml and serde outputs for a tree
//!       ├── config       Layered configuration for the formats and the cli
//!       └── testing      Fluent assertions and verified sample grammars
//!
//!     The data flows strictly left to right: source text → tokens → tree → output.
//!
//! For testing guidelines, see the [testing module](ebnf::testing).

pub mod ebnf;
