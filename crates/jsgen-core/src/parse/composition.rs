use serde_json::Value;
use url::Url;

use crate::ir::{CompositionDef, CompositionKind, TypeDef};
use crate::path::SchemaPath;

use super::{parse_node, ParserResult};

/// Parse an `allOf` / `anyOf` / `oneOf` node; alternatives are parsed as
/// children named by their positional index.
pub(crate) fn parse(
    node: &Value,
    scope: Option<&Url>,
    path: &SchemaPath,
    name: &str,
    kind: CompositionKind,
) -> ParserResult {
    let mut result = ParserResult::new();

    let entries: Vec<&Value> = node
        .get(kind.keyword())
        .and_then(Value::as_array)
        .map(|alts| alts.iter().collect())
        .unwrap_or_default();

    let alternatives: Vec<SchemaPath> = (0..entries.len())
        .map(|index| path.child(&index.to_string()))
        .collect();

    result.insert(
        path.pointer(),
        TypeDef::Composition(CompositionDef {
            name: name.to_string(),
            path: path.clone(),
            kind,
            alternatives: alternatives.clone(),
        }),
    );

    for (index, (entry, alt_path)) in entries.into_iter().zip(alternatives).enumerate() {
        result.merge(parse_node(entry, scope, alt_path, &index.to_string()));
    }

    result
}
