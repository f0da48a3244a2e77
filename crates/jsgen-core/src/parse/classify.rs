use serde_json::Value;

use crate::ir::{CompositionKind, PrimitiveKind};

/// The IR kind a schema node should be parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Composition(CompositionKind),
    Enum,
    Tuple,
    Array,
    Object,
    Union,
    Primitive(PrimitiveKind),
    Reference,
    Definitions,
}

/// Classify a schema node by shape.
///
/// Rules are tried in a fixed order so ambiguous nodes resolve
/// deterministically; a node matching none of them returns `None` and the
/// caller reports `unknown_node_type`.
pub fn classify(node: &Value, is_root: bool) -> Option<NodeKind> {
    let obj = node.as_object()?;

    if obj.contains_key("allOf") {
        return Some(NodeKind::Composition(CompositionKind::AllOf));
    }
    if obj.contains_key("anyOf") {
        return Some(NodeKind::Composition(CompositionKind::AnyOf));
    }
    if obj.contains_key("oneOf") {
        return Some(NodeKind::Composition(CompositionKind::OneOf));
    }

    if obj.contains_key("enum") {
        return Some(NodeKind::Enum);
    }

    let type_field = obj.get("type");

    if type_field.and_then(Value::as_str) == Some("array") {
        return match obj.get("items") {
            Some(Value::Array(_)) => Some(NodeKind::Tuple),
            _ => Some(NodeKind::Array),
        };
    }

    if type_field.and_then(Value::as_str) == Some("object") || obj.contains_key("properties") {
        return Some(NodeKind::Object);
    }

    if let Some(Value::Array(_)) = type_field {
        return Some(NodeKind::Union);
    }

    if let Some(keyword) = type_field.and_then(Value::as_str) {
        if let Some(kind) = PrimitiveKind::from_keyword(keyword) {
            return Some(NodeKind::Primitive(kind));
        }
    }

    if obj.contains_key("$ref") {
        return Some(NodeKind::Reference);
    }

    if is_root && obj.contains_key("definitions") {
        return Some(NodeKind::Definitions);
    }

    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_composition_wins_over_enum() {
        let node = json!({ "oneOf": [], "enum": ["a"] });
        assert_eq!(
            classify(&node, false),
            Some(NodeKind::Composition(CompositionKind::OneOf))
        );
    }

    #[test]
    fn test_enum_wins_over_type() {
        let node = json!({ "type": "string", "enum": ["red", "green"] });
        assert_eq!(classify(&node, false), Some(NodeKind::Enum));
    }

    #[test]
    fn test_array_vs_tuple() {
        let array = json!({ "type": "array", "items": { "type": "number" } });
        let tuple = json!({ "type": "array", "items": [{ "type": "number" }] });
        assert_eq!(classify(&array, false), Some(NodeKind::Array));
        assert_eq!(classify(&tuple, false), Some(NodeKind::Tuple));
    }

    #[test]
    fn test_object_by_properties_alone() {
        let node = json!({ "properties": { "x": { "type": "number" } } });
        assert_eq!(classify(&node, false), Some(NodeKind::Object));
    }

    #[test]
    fn test_union() {
        let node = json!({ "type": ["integer", "string"] });
        assert_eq!(classify(&node, false), Some(NodeKind::Union));
    }

    #[test]
    fn test_primitive() {
        let node = json!({ "type": "number" });
        assert_eq!(
            classify(&node, false),
            Some(NodeKind::Primitive(PrimitiveKind::Number))
        );
    }

    #[test]
    fn test_reference() {
        let node = json!({ "$ref": "#/definitions/point" });
        assert_eq!(classify(&node, false), Some(NodeKind::Reference));
    }

    #[test]
    fn test_definitions_only_at_root() {
        let node = json!({ "definitions": { "point": { "type": "object" } } });
        assert_eq!(classify(&node, true), Some(NodeKind::Definitions));
        assert_eq!(classify(&node, false), None);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify(&json!({ "foo": 1 }), false), None);
        assert_eq!(classify(&json!("not an object"), false), None);
        assert_eq!(classify(&json!({ "type": "frobnicate" }), false), None);
    }
}
