//! JSON and YAML output
//!
//! Both serialize the tree's [AstSnapshot](crate::ebnf::ast::AstSnapshot) with serde.

use super::registry::{FormatError, Formatter};
use crate::ebnf::ast::{snapshot_from_ast, Ast};

/// Formatter implementation for pretty printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&snapshot_from_ast(ast))
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "JSON image of the tree snapshot"
    }
}

/// Formatter implementation for YAML
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, ast: &Ast) -> Result<String, FormatError> {
        serde_yaml::to_string(&snapshot_from_ast(ast))
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "YAML image of the tree snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ebnf::ast::AstSnapshot;
    use crate::ebnf::parsing::parse_syntax;

    #[test]
    fn test_json_reads_back_as_snapshot() {
        let ast = parse_syntax("a = b | \"c\" ;").unwrap();
        let json = JsonFormatter.serialize(&ast).unwrap();

        let snapshot: AstSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, snapshot_from_ast(&ast));
        assert!(json.contains("\"node_type\": \"choice\""));
    }

    #[test]
    fn test_yaml_output() {
        let ast = parse_syntax("a = b ;").unwrap();
        let yaml = YamlFormatter.serialize(&ast).unwrap();

        let snapshot: AstSnapshot = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(snapshot.children[0].label, "a");
        assert!(yaml.contains("node_type: rule"));
    }
}
