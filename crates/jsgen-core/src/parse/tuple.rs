use serde_json::Value;
use url::Url;

use crate::ir::{TupleDef, TypeDef};
use crate::path::SchemaPath;

use super::{parse_node, ParserResult};

/// Parse a positional array node (`items` is an array of schemas); children
/// are named `"0"`, `"1"`, …
pub(crate) fn parse(
    node: &Value,
    scope: Option<&Url>,
    path: &SchemaPath,
    name: &str,
) -> ParserResult {
    let mut result = ParserResult::new();

    let items: Vec<&Value> = node
        .get("items")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().collect())
        .unwrap_or_default();

    let item_paths: Vec<SchemaPath> = (0..items.len())
        .map(|index| path.child(&index.to_string()))
        .collect();

    result.insert(
        path.pointer(),
        TypeDef::Tuple(TupleDef {
            name: name.to_string(),
            path: path.clone(),
            items: item_paths.clone(),
        }),
    );

    for (index, (item, item_path)) in items.into_iter().zip(item_paths).enumerate() {
        result.merge(parse_node(item, scope, item_path, &index.to_string()));
    }

    result
}
