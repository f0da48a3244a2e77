use jsgen_core::config::GenerateConfig;
use jsgen_core::ir::{SchemaDefinition, SchemaDictionary};
use jsgen_core::{RenderedModule, SchemaEmitter};
use thiserror::Error;

use crate::emitters;
use crate::names;

#[derive(Debug, Error)]
pub enum ElmError {
    #[error("template render failed: {0}")]
    Render(String),
}

/// The Elm code generator: one module per schema, with record aliases,
/// sum types, pipeline decoders, and object encoders.
pub struct ElmEmitter;

impl SchemaEmitter for ElmEmitter {
    type Error = ElmError;

    fn file_name(&self, schema: &SchemaDefinition, root_module: &str) -> String {
        names::file_path(root_module, &schema.title)
    }

    fn render_schema(
        &self,
        schema: &SchemaDefinition,
        schemas: &SchemaDictionary,
        config: &GenerateConfig,
    ) -> Result<RenderedModule, Self::Error> {
        emitters::module::render(schema, schemas, config)
    }
}
