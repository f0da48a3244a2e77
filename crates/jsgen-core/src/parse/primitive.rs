use crate::ir::{PrimitiveDef, PrimitiveKind, TypeDef};
use crate::path::SchemaPath;

use super::ParserResult;

/// Parse a primitive leaf node. Primitives have no children.
pub(crate) fn parse(path: &SchemaPath, name: &str, kind: PrimitiveKind) -> ParserResult {
    let mut result = ParserResult::new();
    result.insert(
        path.pointer(),
        TypeDef::Primitive(PrimitiveDef {
            name: name.to_string(),
            path: path.clone(),
            kind,
        }),
    );
    result
}
