use minijinja::{context, Environment};
use jsgen_core::config::{EmitSort, GenerateConfig};
use jsgen_core::ir::{SchemaDefinition, SchemaDictionary, TypeDef};
use jsgen_core::RenderedModule;

use crate::generator::ElmError;
use crate::names;
use crate::type_mapper::TypeMapper;

use super::{decoders, encoders, types};

/// Render one schema's Elm module: header, imports, then one declaration +
/// decoder + encoder block per IR node.
pub fn render(
    schema: &SchemaDefinition,
    schemas: &SchemaDictionary,
    config: &GenerateConfig,
) -> Result<RenderedModule, ElmError> {
    let mut mapper = TypeMapper::new(schema, schemas, &config.root_module);

    let mut blocks = Vec::new();
    for node in emission_nodes(schema, config.emit_sort) {
        let mut parts = Vec::new();
        if let Some(decl) = types::render_type_decl(node, schema, &mut mapper) {
            parts.push(decl);
        }
        if let Some(decoder) = decoders::render_decoder(node, schema, &mut mapper) {
            parts.push(decoder);
        }
        if let Some(encoder) = encoders::render_encoder(node, schema, &mut mapper) {
            parts.push(encoder);
        }
        if !parts.is_empty() {
            blocks.push(parts.join("\n\n\n"));
        }
    }

    let mut env = Environment::new();
    env.add_template("module.elm.j2", include_str!("../../templates/module.elm.j2"))
        .expect("template should be valid");
    let template = env.get_template("module.elm.j2").expect("template was just added");

    let content = template
        .render(context! {
            module_name => names::qualified_module(&config.root_module, &schema.title),
            description => schema.description.clone(),
            imports => mapper.imports.clone(),
            blocks => blocks,
        })
        .map_err(|err| ElmError::Render(err.to_string()))?;

    Ok(RenderedModule {
        content,
        warnings: mapper.warnings,
        errors: mapper.errors,
    })
}

/// The nodes a module emits declarations for, in deterministic order:
/// every entry whose key is its own path (skipping URI aliases so nothing
/// is emitted twice), sorted per `emit_sort`.
fn emission_nodes(schema: &SchemaDefinition, sort: EmitSort) -> Vec<&TypeDef> {
    let mut entries: Vec<(&String, &TypeDef)> = schema
        .types
        .iter()
        .filter(|(key, node)| **key == node.path().pointer())
        .collect();
    if sort == EmitSort::Lexicographic {
        entries.sort_by(|a, b| a.0.cmp(b.0));
    }
    entries.into_iter().map(|(_, node)| node).collect()
}
