//! Error types for AST operations

use super::node_type::NodeType;
use thiserror::Error;

/// Errors raised by tree construction and attribute access
///
/// These signal a misuse of the node API rather than bad grammar input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// The node type does not define the requested attribute
    #[error("Node '{node_type}' has no attribute '{name}'")]
    MissingAttribute { node_type: NodeType, name: String },

    /// The child is the parent itself or one of its ancestors
    #[error("Attaching a '{child}' under a '{parent}' would create a cycle")]
    CyclicAttachment { parent: NodeType, child: NodeType },

    /// The syntax root never has a parent
    #[error("The syntax root can not be attached under another node")]
    RootAttachment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_message() {
        let err = AstError::MissingAttribute {
            node_type: NodeType::Choice,
            name: "value".to_string(),
        };
        assert_eq!(err.to_string(), "Node 'choice' has no attribute 'value'");
    }
}
