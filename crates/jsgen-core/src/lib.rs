pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod path;
pub mod resolve;

use indexmap::IndexMap;
use serde_json::Value;

use config::GenerateConfig;
use error::Diagnostic;
use ir::{SchemaDefinition, SchemaDictionary};

/// One rendered module plus the diagnostics emission produced for it.
#[derive(Debug, Clone, Default)]
pub struct RenderedModule {
    pub content: String,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
}

/// Trait for target-language emitters.
///
/// The core walks the schema dictionary and calls the emitter once per
/// schema; additional target languages plug in here without touching the
/// parser.
pub trait SchemaEmitter {
    type Error: std::error::Error;

    /// Output file key for a schema, e.g. `Data/Circle.elm`.
    fn file_name(&self, schema: &SchemaDefinition, root_module: &str) -> String;

    /// Render one schema's module: type declarations, decoders, encoders.
    fn render_schema(
        &self,
        schema: &SchemaDefinition,
        schemas: &SchemaDictionary,
        config: &GenerateConfig,
    ) -> Result<RenderedModule, Self::Error>;
}

/// Result of a whole generate run: output file dictionary plus aggregated
/// diagnostics. Output may be partial; the caller decides whether to keep it.
#[derive(Debug, Default)]
pub struct SchemaResult {
    pub files: IndexMap<String, String>,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
}

impl SchemaResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run the full pipeline: parse every `(source URI, document)` pair, then
/// emit one module per schema with `emitter`.
pub fn generate<E: SchemaEmitter>(
    documents: &[(String, Value)],
    emitter: &E,
    config: &GenerateConfig,
) -> Result<SchemaResult, E::Error> {
    let parsed = parse::parse_schemas(documents);

    let mut result = SchemaResult {
        files: IndexMap::new(),
        warnings: parsed.warnings,
        errors: parsed.errors,
    };

    log::debug!("emitting {} schemas", parsed.schemas.len());

    for schema in parsed.schemas.iter() {
        let file_name = emitter.file_name(schema, &config.root_module);
        let rendered = emitter.render_schema(schema, &parsed.schemas, config)?;
        result.warnings.extend(rendered.warnings);
        result.errors.extend(rendered.errors);
        result.files.insert(file_name, rendered.content);
    }

    if config.strict {
        let escalated = std::mem::take(&mut result.warnings);
        result.errors.extend(escalated);
    }

    Ok(result)
}
