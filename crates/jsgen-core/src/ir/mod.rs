pub mod schema;
pub mod types;

pub use schema::{SchemaDefinition, SchemaDictionary, TypeDictionary};
pub use types::*;
