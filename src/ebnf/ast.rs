//! AST definitions and utilities for EBNF grammars
//!
//!     This module provides the syntax tree built by the parser, along with the visitor
//!     contract used to render it and the snapshot form used to serialize it.
//!
//! Node Model
//!
//!     Every node has the same shape: a [NodeType] tag, a parent link, an ordered list of
//!     children and a small map of string attributes (the literal text of a terminal, the name
//!     of a rule, ...). Which attributes a node has depends only on its type and is fixed when
//!     the node is created, see [NodeType::attribute_names].
//!
//!     Instead of a class per node kind there is one flat tag enum, and all structure lives in
//!     the [Ast] arena:
//!
//!         Ast
//!           ├── nodes: Arena<Node>   every node ever created for this tree
//!           └── root:  NodeId        the single Syntax node
//!
//!     Ownership flows strictly downwards: the tree owns every node, a node lists its children
//!     by id, and the parent link is an id used for lookups only. Dropping the [Ast] drops
//!     every node at once.
//!
//! Building Trees
//!
//!     Nodes are only created through the per-type factories on [Ast] (`rule`, `terminal`,
//!     `choice`, ...). A factory either attaches the new node under a parent or leaves it
//!     detached, so a subtree can be built on the side and spliced in later with
//!     [Ast::add_child]. Re-attaching a node moves it: it is removed from its previous parent.
//!
//! Reading Trees
//!
//!     Read access goes through [NodeRef], a cheap copyable handle pairing the tree with a node
//!     id. It exposes the type, attributes, children, parent and depth of a node, and the
//!     [accept](NodeRef::accept) entry point for [Visitor]s.
//!
//! ## Modules
//!
//! - `range` - Position type and byte offset to line/column conversion
//! - `node_type` - The node tags and their attribute schema
//! - `tree` - The arena, factories and mutation
//! - `node_ref` - Read only node handles
//! - `traits` - The visitor contract
//! - `snapshot` - Normalized, serializable image of a tree
//! - `error` - Error types for AST operations

pub mod error;
pub mod node_ref;
pub mod node_type;
pub mod range;
pub mod snapshot;
pub mod traits;
pub mod tree;

// Re-export commonly used types at module root
pub use error::AstError;
pub use node_ref::NodeRef;
pub use node_type::NodeType;
pub use range::{Position, SourceLocation};
pub use snapshot::{snapshot_from_ast, snapshot_from_node, AstSnapshot};
pub use traits::{visit_children, Visitor};
pub use tree::{Ast, Node, NodeId, DEFAULT_META};
