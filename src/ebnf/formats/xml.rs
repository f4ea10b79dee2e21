//! XML syntax tree
//!
//! Every node becomes an element named after its type, with its attributes as XML attributes.
//! Nodes without children are written as empty elements.
//!
//! ## Example
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <syntax title="" meta="xis/ebnf v2.0 http://wiki.karmin.ch/ebnf/ gpl3">
//!   <rule name="digit">
//!     <identifier value="digit"/>
//!     <terminal value="0"/>
//!   </rule>
//! </syntax>
//! ```

use super::registry::{FormatError, Formatter};
use crate::ebnf::ast::{Ast, NodeRef};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

struct XmlSerializer {
    output: String,
    indent_level: usize,
}

impl XmlSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn serialize_node(&mut self, node: NodeRef<'_>) {
        let tag = node.node_type().as_str();

        self.output.push_str(&self.indent());
        self.output.push('<');
        self.output.push_str(tag);
        for (name, value) in node.attributes() {
            self.output
                .push_str(&format!(" {}=\"{}\"", name, escape_xml(value)));
        }

        if node.is_leaf() {
            self.output.push_str("/>\n");
            return;
        }

        self.output.push_str(">\n");
        self.indent_level += 1;
        for child in node.children() {
            self.serialize_node(child);
        }
        self.indent_level -= 1;
        self.output.push_str(&format!("{}</{}>\n", self.indent(), tag));
    }
}

/// Serialize a node and its subtree, without the XML declaration
pub fn serialize_node(node: NodeRef<'_>) -> String {
    let mut serializer = XmlSerializer::new();
    serializer.serialize_node(node);
    serializer.output
}

/// Serialize a whole tree as an XML document
pub fn serialize_ast(ast: &Ast) -> String {
    format!("{}\n{}", XML_DECLARATION, serialize_node(ast.root()))
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Formatter implementation for the XML format
pub struct XmlFormatter;

impl Formatter for XmlFormatter {
    fn name(&self) -> &str {
        "xml"
    }

    fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
        Ok(serialize_ast(ast))
    }

    fn description(&self) -> &str {
        "XML document with one element per node"
    }
}
