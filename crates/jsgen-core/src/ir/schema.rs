use indexmap::IndexMap;
use url::Url;

use super::types::TypeDef;

/// Per-schema mapping from identifier string → IR node.
///
/// Every node appears under its path-string key; nodes with an absolute id
/// additionally appear under the URI-alias key. Insertion order is the DFS
/// registration order.
pub type TypeDictionary = IndexMap<String, TypeDef>;

/// One fully parsed schema document.
#[derive(Debug, Clone)]
pub struct SchemaDefinition {
    /// Absolute URI identifying the schema globally.
    pub id: Url,
    pub title: String,
    pub description: Option<String>,
    pub types: TypeDictionary,
}

impl SchemaDefinition {
    /// Look up a node by its identifier string form.
    pub fn node_at(&self, key: &str) -> Option<&TypeDef> {
        self.types.get(key)
    }
}

/// All schemas of one run, keyed by absolute URI string. Built once during
/// parsing and read-only during emission.
#[derive(Debug, Clone, Default)]
pub struct SchemaDictionary {
    schemas: IndexMap<String, SchemaDefinition>,
}

impl SchemaDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schema under its id. Returns the rejected definition when a
    /// schema with the same id is already present (first one wins).
    pub fn insert(&mut self, schema: SchemaDefinition) -> Option<SchemaDefinition> {
        let key = schema.id.to_string();
        if self.schemas.contains_key(&key) {
            return Some(schema);
        }
        self.schemas.insert(key, schema);
        None
    }

    pub fn get(&self, uri: &str) -> Option<&SchemaDefinition> {
        self.schemas.get(uri)
    }

    /// Look up the schema owning `uri`, ignoring any fragment.
    pub fn lookup_base(&self, uri: &Url) -> Option<&SchemaDefinition> {
        let mut base = uri.clone();
        base.set_fragment(None);
        self.schemas.get(base.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaDefinition> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
