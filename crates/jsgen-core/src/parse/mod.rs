pub mod classify;

mod array;
mod composition;
mod definitions;
mod enumeration;
mod object;
mod primitive;
mod reference;
mod tuple;
mod union;

use indexmap::map::Entry;
use serde_json::Value;
use url::Url;

use crate::error::{fingerprint, Diagnostic, DiagnosticKind, ParseError};
use crate::ir::{SchemaDefinition, SchemaDictionary, TypeDef, TypeDictionary};
use crate::path::{SchemaPath, ROOT_MARKER};

use classify::{classify, NodeKind};

/// Output of one sub-parser: the type dictionary fragment produced by a node
/// and its descendants, plus ordered warnings and errors. Sibling results
/// merge by dictionary union and list concatenation.
#[derive(Debug, Default)]
pub struct ParserResult {
    pub types: TypeDictionary,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
}

impl ParserResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under `key`. A duplicate key is a diagnostic, not a
    /// crash; the first registration wins.
    pub(crate) fn insert(&mut self, key: String, def: TypeDef) {
        match self.types.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(def);
            }
            Entry::Occupied(entry) => {
                self.errors.push(Diagnostic::new(
                    DiagnosticKind::DuplicateTypeKey,
                    entry.key().clone(),
                    "a type is already registered under this key",
                ));
            }
        }
    }

    pub(crate) fn merge(&mut self, other: ParserResult) {
        for (key, def) in other.types {
            self.insert(key, def);
        }
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }
}

/// A parsed schema document with the diagnostics collected along the way.
#[derive(Debug)]
pub struct ParsedSchema {
    pub definition: SchemaDefinition,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
}

/// Result of parsing a whole set of documents.
#[derive(Debug, Default)]
pub struct ParsedSchemas {
    pub schemas: SchemaDictionary,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
}

/// Parse one schema document into a `SchemaDefinition`.
///
/// `document_uri` is the source URI of the document; an explicit root `id`
/// field takes precedence (a relative one merges onto the document URI).
pub fn parse_schema(document: &Value, document_uri: &str) -> Result<ParsedSchema, ParseError> {
    let obj = document
        .as_object()
        .ok_or_else(|| ParseError::InvalidDocument(fingerprint(document)))?;

    let document_url = Url::parse(document_uri)
        .map_err(|_| ParseError::InvalidDocumentUri(document_uri.to_string()))?;

    let root_id = match id_field(document) {
        Some(raw) => match Url::parse(raw) {
            Ok(url) => url,
            Err(_) => document_url
                .join(raw)
                .map_err(|_| ParseError::InvalidDocumentUri(raw.to_string()))?,
        },
        None => document_url,
    };

    let root_kind =
        classify(document, true).ok_or_else(|| ParseError::UnclassifiableRoot(fingerprint(document)))?;

    let mut result = parse_node(document, Some(&root_id), SchemaPath::root(), ROOT_MARKER);

    // A root that classifies as a concrete kind may still carry definitions;
    // parse those members too, without the transparent grouping node.
    if root_kind != NodeKind::Definitions && obj.contains_key("definitions") {
        let members = definitions::parse_members(document, Some(&root_id), &SchemaPath::root());
        result.merge(members);
    }

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| title_from_uri(&root_id));
    let description = obj.get("description").and_then(Value::as_str).map(String::from);

    log::debug!(
        "parsed schema {} ({} types, {} errors)",
        root_id,
        result.types.len(),
        result.errors.len()
    );

    Ok(ParsedSchema {
        definition: SchemaDefinition {
            id: root_id,
            title,
            description,
            types: result.types,
        },
        warnings: result.warnings,
        errors: result.errors,
    })
}

/// Parse every `(source URI, document)` pair, accumulating the schema
/// dictionary. A duplicate schema id yields one `duplicate_type_key`
/// diagnostic and retains the first-seen schema.
pub fn parse_schemas(documents: &[(String, Value)]) -> ParsedSchemas {
    let mut parsed = ParsedSchemas::default();

    for (uri, document) in documents {
        match parse_schema(document, uri) {
            Ok(schema) => {
                parsed.warnings.extend(schema.warnings);
                parsed.errors.extend(schema.errors);
                let id = schema.definition.id.to_string();
                if parsed.schemas.insert(schema.definition).is_some() {
                    parsed.errors.push(Diagnostic::new(
                        DiagnosticKind::DuplicateTypeKey,
                        id,
                        "a schema with this id is already registered",
                    ));
                }
            }
            Err(err) => {
                let kind = match err {
                    ParseError::InvalidDocumentUri(_) => DiagnosticKind::InvalidIdUri,
                    _ => DiagnosticKind::UnknownNodeType,
                };
                parsed.errors.push(Diagnostic::new(kind, uri.clone(), err.to_string()));
            }
        }
    }

    parsed
}

/// Parse one node: resolve its identity, classify it, and dispatch to the
/// sub-parser for its kind.
///
/// `inherited` is the nearest ancestor's absolute URI (the document URI at
/// the root). Children receive the node's own non-`urn` id as their scope,
/// else the inherited one.
pub(crate) fn parse_node(
    node: &Value,
    inherited: Option<&Url>,
    path: SchemaPath,
    name: &str,
) -> ParserResult {
    let mut result = ParserResult::new();

    let own_id = match determine_id(node, inherited, &path) {
        Ok(id) => id,
        Err(diagnostic) => {
            result.errors.push(diagnostic);
            None
        }
    };

    let scope = match &own_id {
        Some(id) if id.scheme() != "urn" => Some(id.clone()),
        _ => inherited.cloned(),
    };

    // The id under which this node gets a URI alias: its own id, or the
    // document id threaded in by the driver when this is the schema root.
    let effective_id = own_id.or_else(|| if path.is_root() { inherited.cloned() } else { None });

    let Some(kind) = classify(node, path.is_root()) else {
        result.errors.push(Diagnostic::new(
            DiagnosticKind::UnknownNodeType,
            path.pointer(),
            format!("cannot classify node `{}`: {}", name, fingerprint(node)),
        ));
        return result;
    };

    let parsed = match kind {
        NodeKind::Composition(comp) => composition::parse(node, scope.as_ref(), &path, name, comp),
        NodeKind::Enum => enumeration::parse(node, &path, name),
        NodeKind::Tuple => tuple::parse(node, scope.as_ref(), &path, name),
        NodeKind::Array => array::parse(node, scope.as_ref(), &path, name),
        NodeKind::Object => object::parse(node, scope.as_ref(), &path, name),
        NodeKind::Union => union::parse(node, &path, name),
        NodeKind::Primitive(prim) => primitive::parse(&path, name, prim),
        NodeKind::Reference => reference::parse(node, &path, name),
        NodeKind::Definitions => definitions::parse(node, scope.as_ref(), &path, name),
    };
    result.merge(parsed);

    if let Some(id) = effective_id {
        if let Some(def) = result.types.get(&path.pointer()).cloned() {
            result.insert(alias_key(&id, name, path.is_root()), def);
        }
    }

    result
}

/// Resolve a node's `id` field (either the draft-04 `id` or the newer `$id`
/// spelling). A `urn` id is used as-is; anything else merges onto the
/// inherited URI per RFC 3986.
fn determine_id(
    node: &Value,
    inherited: Option<&Url>,
    path: &SchemaPath,
) -> Result<Option<Url>, Diagnostic> {
    let Some(raw) = id_field(node) else {
        return Ok(None);
    };

    match Url::parse(raw) {
        Ok(url) => Ok(Some(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => match inherited {
            Some(base) => base.join(raw).map(Some).map_err(|err| {
                Diagnostic::new(
                    DiagnosticKind::InvalidIdUri,
                    path.pointer(),
                    format!("cannot merge id `{raw}` onto `{base}`: {err}"),
                )
            }),
            None => Err(Diagnostic::new(
                DiagnosticKind::InvalidIdUri,
                path.pointer(),
                format!("relative id `{raw}` without a base URI"),
            )),
        },
        Err(err) => Err(Diagnostic::new(
            DiagnosticKind::InvalidIdUri,
            path.pointer(),
            format!("id `{raw}` is not a valid URI: {err}"),
        )),
    }
}

fn id_field(node: &Value) -> Option<&str> {
    let obj = node.as_object()?;
    obj.get("id").or_else(|| obj.get("$id")).and_then(Value::as_str)
}

/// The absolute-URI alias key for a node: the id itself for the schema root
/// (or when the merge already produced a fragment), else `<id>#<name>`.
fn alias_key(id: &Url, name: &str, is_root: bool) -> String {
    if is_root || id.fragment().is_some_and(|f| !f.is_empty()) {
        return id.to_string();
    }
    let mut aliased = id.clone();
    aliased.set_fragment(Some(name));
    aliased.to_string()
}

/// Fallback title for schemas without one: the file stem of the id URI.
fn title_from_uri(id: &Url) -> String {
    id.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.split('.').next().unwrap_or(segment).to_string())
        .unwrap_or_else(|| "Schema".to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_alias_key_root() {
        let id = Url::parse("http://example.com/definitions.json").unwrap();
        assert_eq!(alias_key(&id, "#", true), "http://example.com/definitions.json");
    }

    #[test]
    fn test_alias_key_merged_fragment() {
        let id = Url::parse("http://example.com/definitions.json#point").unwrap();
        assert_eq!(
            alias_key(&id, "point", false),
            "http://example.com/definitions.json#point"
        );
    }

    #[test]
    fn test_alias_key_appends_name() {
        let id = Url::parse("http://example.com/shapes.json").unwrap();
        assert_eq!(
            alias_key(&id, "circle", false),
            "http://example.com/shapes.json#circle"
        );
    }

    #[test]
    fn test_determine_id_urn_used_as_is() {
        let node = json!({ "id": "urn:example:point", "type": "object" });
        let base = Url::parse("http://example.com/a.json").unwrap();
        let id = determine_id(&node, Some(&base), &SchemaPath::root()).unwrap();
        assert_eq!(id.unwrap().as_str(), "urn:example:point");
    }

    #[test]
    fn test_determine_id_merges_relative() {
        let node = json!({ "id": "#point" });
        let base = Url::parse("http://example.com/definitions.json").unwrap();
        let id = determine_id(&node, Some(&base), &SchemaPath::root()).unwrap();
        assert_eq!(id.unwrap().as_str(), "http://example.com/definitions.json#point");
    }

    #[test]
    fn test_title_from_uri() {
        let id = Url::parse("http://example.com/definitions.json").unwrap();
        assert_eq!(title_from_uri(&id), "definitions");
    }
}
