use std::collections::HashSet;

use serde_json::Value;

use crate::error::{Diagnostic, DiagnosticKind};
use crate::ir::{EnumDef, PrimitiveKind, TypeDef};
use crate::path::SchemaPath;

use super::ParserResult;

/// Parse an enum node. The primitive base and the raw value list are
/// captured directly; children are not recursed.
pub(crate) fn parse(node: &Value, path: &SchemaPath, name: &str) -> ParserResult {
    let mut result = ParserResult::new();

    let base = node
        .get("type")
        .and_then(Value::as_str)
        .and_then(PrimitiveKind::from_keyword)
        .unwrap_or(PrimitiveKind::String);

    let values: Vec<Value> = node
        .get("enum")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    result.insert(
        path.pointer(),
        TypeDef::Enum(EnumDef {
            name: name.to_string(),
            path: path.clone(),
            base,
            values: values.clone(),
        }),
    );

    if values.is_empty() {
        result.errors.push(Diagnostic::new(
            DiagnosticKind::InvalidEnumValue,
            path.pointer(),
            format!("enum `{name}` has no values"),
        ));
    }

    let mut seen = HashSet::new();
    for value in &values {
        if !base.admits(value) {
            result.errors.push(Diagnostic::new(
                DiagnosticKind::InvalidEnumValue,
                path.pointer(),
                format!("enum value {value} does not match base type {base}"),
            ));
        }
        if !seen.insert(value.to_string()) {
            result.errors.push(Diagnostic::new(
                DiagnosticKind::InvalidEnumValue,
                path.pointer(),
                format!("enum value {value} appears more than once"),
            ));
        }
    }

    result
}
