use serde_json::Value;

use crate::error::{Diagnostic, DiagnosticKind};
use crate::ir::{ReferenceDef, TypeDef, TypeIdentifier};
use crate::path::SchemaPath;

use super::ParserResult;

/// Parse a `$ref` node. The target is stored as a URI when the string has a
/// scheme, else as an intra-document path; no children are parsed.
pub(crate) fn parse(node: &Value, path: &SchemaPath, name: &str) -> ParserResult {
    let mut result = ParserResult::new();

    let Some(raw) = node.get("$ref").and_then(Value::as_str) else {
        result.errors.push(Diagnostic::new(
            DiagnosticKind::UnknownNodeType,
            path.pointer(),
            format!("reference `{name}` has a non-string $ref"),
        ));
        return result;
    };

    result.insert(
        path.pointer(),
        TypeDef::Reference(ReferenceDef {
            name: name.to_string(),
            path: path.clone(),
            target: TypeIdentifier::from_ref(raw),
        }),
    );

    result
}
