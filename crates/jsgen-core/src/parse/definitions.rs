use serde_json::Value;
use url::Url;

use crate::ir::{DefinitionsDef, TypeDef};
use crate::path::SchemaPath;

use super::{parse_node, ParserResult};

/// Parse a `definitions` document: register the transparent grouping node,
/// then its members.
pub(crate) fn parse(
    node: &Value,
    scope: Option<&Url>,
    path: &SchemaPath,
    name: &str,
) -> ParserResult {
    let mut result = ParserResult::new();

    let members: Vec<String> = node
        .get("definitions")
        .and_then(Value::as_object)
        .map(|defs| defs.keys().cloned().collect())
        .unwrap_or_default();

    result.insert(
        path.pointer(),
        TypeDef::Definitions(DefinitionsDef {
            name: name.to_string(),
            path: path.clone(),
            members,
        }),
    );

    result.merge(parse_members(node, scope, path));
    result
}

/// Parse the members of a `definitions` map, naming children by their keys.
/// Used both for definitions documents and for concrete roots that carry a
/// `definitions` member alongside their own shape.
pub(crate) fn parse_members(node: &Value, scope: Option<&Url>, path: &SchemaPath) -> ParserResult {
    let mut result = ParserResult::new();

    let Some(defs) = node.get("definitions").and_then(Value::as_object) else {
        return result;
    };

    let base = path.child("definitions");
    for (member_name, member_node) in defs {
        let child_path = base.child(member_name);
        result.merge(parse_node(member_node, scope, child_path, member_name));
    }

    result
}
