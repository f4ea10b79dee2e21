//! Output format implementations for tree serialization
//!
//! This module contains the formats a parsed grammar can be rendered to:
//! - text: the indented text syntax tree, built by the [TextSyntaxTree] visitor
//! - xml: one element per node
//! - treeviz: one line per node with connectors and icons
//! - json / yaml: serde images of the tree snapshot

pub mod registry;
pub mod serde_formats;
pub mod text;
pub mod treeviz;
pub mod xml;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use text::{to_text, TextFormatter, TextSyntaxTree};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use xml::{serialize_ast as serialize_ast_xml, XmlFormatter};
