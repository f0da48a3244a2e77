use serde_json::Value;

use crate::error::{Diagnostic, DiagnosticKind};
use crate::ir::{PrimitiveKind, TypeDef, UnionDef};
use crate::path::SchemaPath;

use super::ParserResult;

/// Parse a node whose `type` is an array of primitive keywords.
pub(crate) fn parse(node: &Value, path: &SchemaPath, name: &str) -> ParserResult {
    let mut result = ParserResult::new();

    let mut types = Vec::new();
    if let Some(entries) = node.get("type").and_then(Value::as_array) {
        for entry in entries {
            match entry.as_str().and_then(PrimitiveKind::from_keyword) {
                Some(kind) => types.push(kind),
                None => result.errors.push(Diagnostic::new(
                    DiagnosticKind::UnknownNodeType,
                    path.pointer(),
                    format!("union member {entry} is not a primitive type"),
                )),
            }
        }
    }

    result.insert(
        path.pointer(),
        TypeDef::Union(UnionDef {
            name: name.to_string(),
            path: path.clone(),
            types,
        }),
    );

    result
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_members_in_order() {
        let node = json!({ "type": ["integer", "string", "null"] });
        let result = parse(&node, &SchemaPath::root(), "#");
        match &result.types["#"] {
            TypeDef::Union(def) => assert_eq!(
                def.types,
                vec![PrimitiveKind::Integer, PrimitiveKind::String, PrimitiveKind::Null]
            ),
            other => panic!("expected union, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_non_primitive_member_reported() {
        let node = json!({ "type": ["integer", "object"] });
        let result = parse(&node, &SchemaPath::root(), "#");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, DiagnosticKind::UnknownNodeType);
    }
}
