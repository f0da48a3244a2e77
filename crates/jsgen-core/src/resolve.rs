use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::ir::{SchemaDefinition, SchemaDictionary, TypeDef, TypeIdentifier};

/// Why an identifier could not be resolved to a concrete IR node.
///
/// Unresolved identifiers are diagnostics at emission time, not crashes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unresolved {
    #[error("no type registered for `{0}`")]
    NotFound(String),

    #[error("cyclic reference chain through `{0}`")]
    Cyclic(String),
}

/// A concrete IR node together with the schema that owns it. The owner is
/// what lets an emitter module-qualify cross-schema use sites.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub node: &'a TypeDef,
    pub schema: &'a SchemaDefinition,
}

/// Chases paths, URI aliases, and `Reference` chains through the schema
/// dictionary.
pub struct Resolver<'a> {
    schemas: &'a SchemaDictionary,
}

impl<'a> Resolver<'a> {
    pub fn new(schemas: &'a SchemaDictionary) -> Self {
        Self { schemas }
    }

    /// Resolve `identifier` relative to `current`, following `Reference`
    /// nodes until a concrete node is reached. Each call carries a fresh
    /// visited set, so resolution is idempotent and cycles terminate.
    pub fn resolve(
        &self,
        identifier: &TypeIdentifier,
        current: &'a SchemaDefinition,
    ) -> Result<Resolved<'a>, Unresolved> {
        let mut visited = HashSet::new();
        self.resolve_inner(identifier, current, &mut visited)
    }

    fn resolve_inner(
        &self,
        identifier: &TypeIdentifier,
        current: &'a SchemaDefinition,
        visited: &mut HashSet<String>,
    ) -> Result<Resolved<'a>, Unresolved> {
        let visit_key = match identifier {
            TypeIdentifier::Path(path) => format!("{}|{}", current.id, path),
            TypeIdentifier::Uri(uri) => uri.to_string(),
        };
        if !visited.insert(visit_key) {
            return Err(Unresolved::Cyclic(identifier.to_string()));
        }

        match identifier {
            TypeIdentifier::Path(path) => {
                let key = path.pointer();
                let node = current
                    .types
                    .get(&key)
                    .or_else(|| self.fragment_alias(&key, current))
                    .ok_or_else(|| Unresolved::NotFound(key.clone()))?;
                self.follow(node, current, visited)
            }
            TypeIdentifier::Uri(uri) => {
                let schema = self
                    .schemas
                    .lookup_base(uri)
                    .ok_or_else(|| Unresolved::NotFound(uri.to_string()))?;
                let key = match uri.fragment() {
                    Some(fragment) if !fragment.is_empty() => uri.to_string(),
                    _ => {
                        let mut base = uri.clone();
                        base.set_fragment(None);
                        base.to_string()
                    }
                };
                let node = schema
                    .types
                    .get(&key)
                    .ok_or_else(|| Unresolved::NotFound(key.clone()))?;
                self.follow(node, schema, visited)
            }
        }
    }

    /// Fallback for fragment-only refs (`#color`): try the current schema's
    /// absolute-URI alias `<id>#color`.
    fn fragment_alias(&self, key: &str, current: &'a SchemaDefinition) -> Option<&'a TypeDef> {
        let fragment = key.strip_prefix('#')?;
        if fragment.is_empty() || fragment.contains('/') {
            return None;
        }
        let mut aliased: Url = current.id.clone();
        aliased.set_fragment(Some(fragment));
        current.types.get(aliased.as_str())
    }

    fn follow(
        &self,
        node: &'a TypeDef,
        schema: &'a SchemaDefinition,
        visited: &mut HashSet<String>,
    ) -> Result<Resolved<'a>, Unresolved> {
        match node {
            TypeDef::Reference(reference) => {
                self.resolve_inner(&reference.target, schema, visited)
            }
            _ => Ok(Resolved { node, schema }),
        }
    }
}
