use serde_json::Value;
use url::Url;

use crate::error::{Diagnostic, DiagnosticKind};
use crate::ir::{ArrayDef, TypeDef};
use crate::path::SchemaPath;

use super::{parse_node, ParserResult};

/// Parse a homogeneous array node; its single child is named `items`.
pub(crate) fn parse(
    node: &Value,
    scope: Option<&Url>,
    path: &SchemaPath,
    name: &str,
) -> ParserResult {
    let mut result = ParserResult::new();

    let items_path = path.child("items");
    result.insert(
        path.pointer(),
        TypeDef::Array(ArrayDef {
            name: name.to_string(),
            path: path.clone(),
            items: items_path.clone(),
        }),
    );

    match node.get("items") {
        Some(items) => result.merge(parse_node(items, scope, items_path, "items")),
        None => result.errors.push(Diagnostic::new(
            DiagnosticKind::UnknownNodeType,
            items_path.pointer(),
            format!("array `{name}` has no items schema"),
        )),
    }

    result
}
