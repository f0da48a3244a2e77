use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use url::Url;

use crate::path::SchemaPath;

/// JSON Schema primitive base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Integer,
    Number,
    Boolean,
    Null,
}

impl PrimitiveKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(PrimitiveKind::String),
            "integer" => Some(PrimitiveKind::Integer),
            "number" => Some(PrimitiveKind::Number),
            "boolean" => Some(PrimitiveKind::Boolean),
            "null" => Some(PrimitiveKind::Null),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Null => "null",
        }
    }

    /// Whether a JSON value inhabits this base type.
    pub fn admits(&self, value: &serde_json::Value) -> bool {
        match self {
            PrimitiveKind::String => value.is_string(),
            PrimitiveKind::Integer => value.is_i64() || value.is_u64(),
            PrimitiveKind::Number => value.is_number(),
            PrimitiveKind::Boolean => value.is_boolean(),
            PrimitiveKind::Null => value.is_null(),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// Identifies a type either within the current document or globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeIdentifier {
    Path(SchemaPath),
    Uri(Url),
}

impl TypeIdentifier {
    /// Classify a `$ref` string: URIs with a scheme stay URIs, everything
    /// else becomes an intra-document path.
    pub fn from_ref(reference: &str) -> Self {
        match Url::parse(reference) {
            Ok(url) => TypeIdentifier::Uri(url),
            Err(_) => TypeIdentifier::Path(SchemaPath::from_pointer(reference)),
        }
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeIdentifier::Path(path) => write!(f, "{path}"),
            TypeIdentifier::Uri(uri) => write!(f, "{uri}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionKind {
    AllOf,
    AnyOf,
    OneOf,
}

impl CompositionKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            CompositionKind::AllOf => "allOf",
            CompositionKind::AnyOf => "anyOf",
            CompositionKind::OneOf => "oneOf",
        }
    }
}

/// A node of the intermediate representation.
///
/// Children are referenced by `SchemaPath`, never inlined, so the IR is a
/// forest by ownership and a graph only under resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    Primitive(PrimitiveDef),
    Enum(EnumDef),
    Object(ObjectDef),
    Array(ArrayDef),
    Tuple(TupleDef),
    Union(UnionDef),
    Composition(CompositionDef),
    Reference(ReferenceDef),
    Definitions(DefinitionsDef),
}

impl TypeDef {
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Primitive(d) => &d.name,
            TypeDef::Enum(d) => &d.name,
            TypeDef::Object(d) => &d.name,
            TypeDef::Array(d) => &d.name,
            TypeDef::Tuple(d) => &d.name,
            TypeDef::Union(d) => &d.name,
            TypeDef::Composition(d) => &d.name,
            TypeDef::Reference(d) => &d.name,
            TypeDef::Definitions(d) => &d.name,
        }
    }

    pub fn path(&self) -> &SchemaPath {
        match self {
            TypeDef::Primitive(d) => &d.path,
            TypeDef::Enum(d) => &d.path,
            TypeDef::Object(d) => &d.path,
            TypeDef::Array(d) => &d.path,
            TypeDef::Tuple(d) => &d.path,
            TypeDef::Union(d) => &d.path,
            TypeDef::Composition(d) => &d.path,
            TypeDef::Reference(d) => &d.path,
            TypeDef::Definitions(d) => &d.path,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeDef::Primitive(_) => "primitive",
            TypeDef::Enum(_) => "enum",
            TypeDef::Object(_) => "object",
            TypeDef::Array(_) => "array",
            TypeDef::Tuple(_) => "tuple",
            TypeDef::Union(_) => "union",
            TypeDef::Composition(d) => d.kind.keyword(),
            TypeDef::Reference(_) => "reference",
            TypeDef::Definitions(_) => "definitions",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveDef {
    pub name: String,
    pub path: SchemaPath,
    pub kind: PrimitiveKind,
}

/// An enumeration over literal values of one primitive base type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name: String,
    pub path: SchemaPath,
    pub base: PrimitiveKind,
    pub values: Vec<serde_json::Value>,
}

/// An object type. `properties` maps property name → path of the child
/// type; `required` is a subset of the property names.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDef {
    pub name: String,
    pub path: SchemaPath,
    pub required: BTreeSet<String>,
    pub properties: IndexMap<String, SchemaPath>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDef {
    pub name: String,
    pub path: SchemaPath,
    pub items: SchemaPath,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TupleDef {
    pub name: String,
    pub path: SchemaPath,
    pub items: Vec<SchemaPath>,
}

/// A union of primitive base types (`"type": ["integer", "string"]`).
#[derive(Debug, Clone, PartialEq)]
pub struct UnionDef {
    pub name: String,
    pub path: SchemaPath,
    pub types: Vec<PrimitiveKind>,
}

/// An `allOf` / `anyOf` / `oneOf` node over positional alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionDef {
    pub name: String,
    pub path: SchemaPath,
    pub kind: CompositionKind,
    pub alternatives: Vec<SchemaPath>,
}

/// A `$ref` node pointing at another type by path or URI.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDef {
    pub name: String,
    pub path: SchemaPath,
    pub target: TypeIdentifier,
}

/// Transparent grouping node for a `definitions` document. Its members are
/// registered in the type dictionary; the node itself emits nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionsDef {
    pub name: String,
    pub path: SchemaPath,
    pub members: Vec<String>,
}
