//! Node tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of node kinds in a grammar tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// The root of every tree
    Syntax,
    /// A production: `name = expression ;`
    Rule,
    /// A reference to a rule by name
    Identifier,
    /// A quoted literal
    Terminal,
    Comment,
    /// Terms in order: `a , b`
    Sequence,
    /// Alternatives: `a | b`
    Choice,
    /// `[ ... ]`
    Optional,
    /// `{ ... }`
    Repetition,
    /// `( ... )`
    Group,
    /// `a - b`
    Exception,
}

impl NodeType {
    pub const ALL: [NodeType; 11] = [
        NodeType::Syntax,
        NodeType::Rule,
        NodeType::Identifier,
        NodeType::Terminal,
        NodeType::Comment,
        NodeType::Sequence,
        NodeType::Choice,
        NodeType::Optional,
        NodeType::Repetition,
        NodeType::Group,
        NodeType::Exception,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Syntax => "syntax",
            NodeType::Rule => "rule",
            NodeType::Identifier => "identifier",
            NodeType::Terminal => "terminal",
            NodeType::Comment => "comment",
            NodeType::Sequence => "sequence",
            NodeType::Choice => "choice",
            NodeType::Optional => "optional",
            NodeType::Repetition => "repetition",
            NodeType::Group => "group",
            NodeType::Exception => "exception",
        }
    }

    /// The attributes every node of this type carries, in declaration order
    pub fn attribute_names(&self) -> &'static [&'static str] {
        match self {
            NodeType::Syntax => &["title", "meta"],
            NodeType::Rule => &["name"],
            NodeType::Identifier | NodeType::Terminal | NodeType::Comment => &["value"],
            NodeType::Sequence
            | NodeType::Choice
            | NodeType::Optional
            | NodeType::Repetition
            | NodeType::Group
            | NodeType::Exception => &[],
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute_names().contains(&name)
    }

    /// The attribute shown as the node's label, if any
    pub fn label_attribute(&self) -> Option<&'static str> {
        match self {
            NodeType::Syntax => Some("title"),
            NodeType::Rule => Some("name"),
            NodeType::Identifier | NodeType::Terminal | NodeType::Comment => Some("value"),
            _ => None,
        }
    }

    /// Nodes that wrap other grammar constructs
    pub fn is_composite(&self) -> bool {
        !matches!(
            self,
            NodeType::Identifier | NodeType::Terminal | NodeType::Comment
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .iter()
            .copied()
            .find(|node_type| node_type.as_str() == s)
            .ok_or_else(|| format!("Unknown node type '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_schema() {
        assert_eq!(NodeType::Syntax.attribute_names(), &["title", "meta"]);
        assert!(NodeType::Rule.has_attribute("name"));
        assert!(!NodeType::Rule.has_attribute("value"));
        assert!(NodeType::Choice.attribute_names().is_empty());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("repetition".parse::<NodeType>(), Ok(NodeType::Repetition));
        assert_eq!(
            "loop".parse::<NodeType>(),
            Err("Unknown node type 'loop'".to_string())
        );
    }

    #[test]
    fn test_composites() {
        assert!(NodeType::Syntax.is_composite());
        assert!(NodeType::Exception.is_composite());
        assert!(!NodeType::Terminal.is_composite());
    }
}
