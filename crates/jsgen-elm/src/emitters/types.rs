use std::collections::HashSet;

use heck::ToLowerCamelCase;
use jsgen_core::ir::{
    ArrayDef, CompositionDef, CompositionKind, EnumDef, ObjectDef, PrimitiveKind,
    SchemaDefinition, TupleDef, TypeDef, TypeIdentifier, UnionDef,
};
use jsgen_core::path::SchemaPath;

use crate::names;
use crate::type_mapper::{primitive_type, TypeMapper};

/// Render the type declaration for one IR node, or `None` for kinds that
/// produce no standalone declaration (primitives, references, definitions).
pub fn render_type_decl(
    node: &TypeDef,
    schema: &SchemaDefinition,
    mapper: &mut TypeMapper<'_>,
) -> Option<String> {
    match node {
        TypeDef::Object(def) => Some(render_object(def, schema, mapper)),
        TypeDef::Enum(def) => Some(render_enum(def, schema)),
        TypeDef::Array(def) => Some(render_array(def, schema, mapper)),
        TypeDef::Tuple(def) => Some(render_tuple(def, schema, mapper)),
        TypeDef::Union(def) => render_union(def, schema),
        TypeDef::Composition(def) => Some(render_composition(def, schema, mapper)),
        TypeDef::Primitive(_) | TypeDef::Reference(_) | TypeDef::Definitions(_) => None,
    }
}

/// Properties of an object in emission order (lexicographic by name).
pub(crate) fn ordered_properties(def: &ObjectDef) -> Vec<(&String, &SchemaPath)> {
    let mut fields: Vec<(&String, &SchemaPath)> = def.properties.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));
    fields
}

/// Record fields for an `allOf` node: one per alternative, named after the
/// alternative's type, deduplicated by positional index.
pub(crate) fn allof_fields(
    def: &CompositionDef,
    mapper: &mut TypeMapper<'_>,
) -> Vec<(String, TypeIdentifier)> {
    let mut used = HashSet::new();
    let mut fields = Vec::new();
    for (index, alternative) in def.alternatives.iter().enumerate() {
        let identifier = TypeIdentifier::Path(alternative.clone());
        let mut name = mapper.alternative_name(&identifier).to_lower_camel_case();
        if name.is_empty() {
            name = format!("item{index}");
        }
        if !used.insert(name.clone()) {
            name = format!("{name}{index}");
            used.insert(name.clone());
        }
        fields.push((name, identifier));
    }
    fields
}

/// Constructor name for one member of a primitive union.
pub(crate) fn union_constructor(type_name: &str, kind: PrimitiveKind) -> String {
    use heck::ToPascalCase;
    if kind == PrimitiveKind::Null {
        format!("{type_name}Null")
    } else {
        format!("{}{}", type_name, kind.as_keyword().to_pascal_case())
    }
}

/// Constructor name for one `oneOf` / `anyOf` alternative.
pub(crate) fn composition_constructor(type_name: &str, alternative_name: &str) -> String {
    use heck::ToPascalCase;
    format!("{}{}", type_name, alternative_name.to_pascal_case())
}

fn render_object(def: &ObjectDef, schema: &SchemaDefinition, mapper: &mut TypeMapper<'_>) -> String {
    let type_name = names::type_name(&def.path, &schema.title);

    let mut lines = Vec::new();
    for (property, target) in ordered_properties(def) {
        let elm = mapper.use_site(&TypeIdentifier::Path(target.clone()));
        let annotation = if def.required.contains(property) {
            elm.annotation
        } else {
            format!("Maybe {}", names::parenthesize(&elm.annotation))
        };
        lines.push(format!("{} : {}", names::field_name(property), annotation));
    }

    record_alias(&type_name, &lines)
}

fn render_enum(def: &EnumDef, schema: &SchemaDefinition) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let constructors: Vec<String> = def
        .values
        .iter()
        .map(|value| names::enum_constructor(&type_name, value))
        .collect();
    format!("type {}\n    = {}", type_name, constructors.join("\n    | "))
}

fn render_array(def: &ArrayDef, schema: &SchemaDefinition, mapper: &mut TypeMapper<'_>) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let item = mapper.use_site(&TypeIdentifier::Path(def.items.clone()));
    format!(
        "type alias {} =\n    List {}",
        type_name,
        names::parenthesize(&item.annotation)
    )
}

fn render_tuple(def: &TupleDef, schema: &SchemaDefinition, mapper: &mut TypeMapper<'_>) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let lines: Vec<String> = def
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let elm = mapper.use_site(&TypeIdentifier::Path(item.clone()));
            format!("item{} : {}", index, elm.annotation)
        })
        .collect();
    record_alias(&type_name, &lines)
}

fn render_union(def: &UnionDef, schema: &SchemaDefinition) -> Option<String> {
    if def.types.is_empty() {
        return None;
    }
    let type_name = names::type_name(&def.path, &schema.title);
    let constructors: Vec<String> = def
        .types
        .iter()
        .map(|kind| {
            if *kind == PrimitiveKind::Null {
                union_constructor(&type_name, *kind)
            } else {
                format!(
                    "{} {}",
                    union_constructor(&type_name, *kind),
                    primitive_type(*kind)
                )
            }
        })
        .collect();
    Some(format!(
        "type {}\n    = {}",
        type_name,
        constructors.join("\n    | ")
    ))
}

fn render_composition(
    def: &CompositionDef,
    schema: &SchemaDefinition,
    mapper: &mut TypeMapper<'_>,
) -> String {
    let type_name = names::type_name(&def.path, &schema.title);

    if def.kind == CompositionKind::AllOf {
        let mut lines = Vec::new();
        for (field, identifier) in allof_fields(def, mapper) {
            let elm = mapper.use_site(&identifier);
            lines.push(format!("{} : {}", field, elm.annotation));
        }
        return record_alias(&type_name, &lines);
    }

    let constructors: Vec<String> = def
        .alternatives
        .iter()
        .map(|alternative| {
            let identifier = TypeIdentifier::Path(alternative.clone());
            if mapper.is_null(&identifier) {
                return format!("{type_name}Null");
            }
            let alt_name = mapper.alternative_name(&identifier);
            let elm = mapper.use_site(&identifier);
            format!(
                "{} {}",
                composition_constructor(&type_name, &alt_name),
                names::parenthesize(&elm.annotation)
            )
        })
        .collect();

    format!("type {}\n    = {}", type_name, constructors.join("\n    | "))
}

fn record_alias(type_name: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        return format!("type alias {type_name} =\n    {{}}");
    }
    format!(
        "type alias {} =\n    {{ {}\n    }}",
        type_name,
        lines.join("\n    , ")
    )
}
