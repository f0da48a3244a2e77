use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde_json::Value;
use url::Url;

use crate::error::{Diagnostic, DiagnosticKind};
use crate::ir::{ObjectDef, TypeDef};
use crate::path::SchemaPath;

use super::{parse_node, ParserResult};

/// Parse an object node. Properties are parsed as child nodes named after
/// the property; the emitted IR holds only their paths.
pub(crate) fn parse(
    node: &Value,
    scope: Option<&Url>,
    path: &SchemaPath,
    name: &str,
) -> ParserResult {
    let mut result = ParserResult::new();

    let mut properties = IndexMap::new();
    let mut children = Vec::new();

    if let Some(props) = node.get("properties").and_then(Value::as_object) {
        for (prop_name, prop_node) in props {
            let child_path = path.child(prop_name);
            properties.insert(prop_name.clone(), child_path.clone());
            children.push((prop_node, child_path, prop_name.clone()));
        }
    }

    let required: BTreeSet<String> = node
        .get("required")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let missing: Vec<&String> = required
        .iter()
        .filter(|name| !properties.contains_key(*name))
        .collect();
    for required_name in missing {
        result.errors.push(Diagnostic::new(
            DiagnosticKind::MissingRequiredPropertyTarget,
            path.pointer(),
            format!("required property `{required_name}` is not declared in properties"),
        ));
    }

    let def = TypeDef::Object(ObjectDef {
        name: name.to_string(),
        path: path.clone(),
        required,
        properties,
    });
    result.insert(path.pointer(), def);

    for (prop_node, child_path, prop_name) in children {
        result.merge(parse_node(prop_node, scope, child_path, &prop_name));
    }

    result
}
