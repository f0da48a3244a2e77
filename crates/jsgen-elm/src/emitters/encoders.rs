use heck::ToLowerCamelCase;
use jsgen_core::ir::{
    ArrayDef, CompositionDef, CompositionKind, EnumDef, ObjectDef, PrimitiveKind,
    SchemaDefinition, TupleDef, TypeDef, TypeIdentifier, UnionDef,
};

use crate::names;
use crate::type_mapper::{primitive_encoder, TypeMapper};

use super::types::{
    allof_fields, composition_constructor, ordered_properties, union_constructor,
};

/// Render the encoder for one IR node, or `None` for kinds without one.
pub fn render_encoder(
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

fn render_object(def: &ObjectDef, schema: &SchemaDefinition, mapper: &mut TypeMapper<'_>) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let encoder = names::encoder_name(&def.path, &schema.title);
    let pairs = names::pairs_name(&def.path, &schema.title);
    let argument = type_name.to_lower_camel_case();

    let mut groups = Vec::new();
    for (property, target) in ordered_properties(def) {
        let elm = mapper.use_site(&TypeIdentifier::Path(target.clone()));
        let field = names::field_name(property);
        if def.required.contains(property) {
            groups.push(format!(
                "[ ( \"{}\", {} {}.{} ) ]",
                property, elm.encoder, argument, field
            ));
        } else {
            groups.push(format!(
                "{}.{}\n        |> Maybe.map (\\value -> [ ( \"{}\", {} value ) ])\n        |> Maybe.withDefault []",
                argument, field, property, elm.encoder
            ));
        }
    }

    let pairs_body = if groups.is_empty() {
        "    []".to_string()
    } else {
        format!("    [ {}\n    ]\n        |> List.concat", groups.join("\n    , "))
    };

    format!(
        "{encoder} : {type_name} -> Value\n{encoder} {argument} =\n    {pairs} {argument}\n        |> Encode.object\n\n\n{pairs} : {type_name} -> List ( String, Value )\n{pairs} {argument} =\n{pairs_body}"
    )
}

fn render_enum(def: &EnumDef, schema: &SchemaDefinition) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let encoder = names::encoder_name(&def.path, &schema.title);
    let argument = names::field_name(&names::display_name(&def.path, &schema.title));

    let arms: Vec<String> = def
        .values
        .iter()
        .map(|value| {
            let constructor = names::enum_constructor(&type_name, value);
            format!(
                "        {} ->\n            {}",
                constructor,
                encode_literal(def.base, value)
            )
        })
        .collect();

    format!(
        "{encoder} : {type_name} -> Value\n{encoder} {argument} =\n    case {argument} of\n{}",
        arms.join("\n\n")
    )
}

fn render_array(def: &ArrayDef, schema: &SchemaDefinition, mapper: &mut TypeMapper<'_>) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let encoder = names::encoder_name(&def.path, &schema.title);
    let argument = type_name.to_lower_camel_case();
    let item = mapper.use_site(&TypeIdentifier::Path(def.items.clone()));
    format!(
        "{encoder} : {type_name} -> Value\n{encoder} {argument} =\n    Encode.list {} {argument}",
        item.encoder
    )
}

fn render_tuple(def: &TupleDef, schema: &SchemaDefinition, mapper: &mut TypeMapper<'_>) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let encoder = names::encoder_name(&def.path, &schema.title);
    let argument = type_name.to_lower_camel_case();

    let items: Vec<String> = def
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let elm = mapper.use_site(&TypeIdentifier::Path(item.clone()));
            format!("{} {}.item{}", elm.encoder, argument, index)
        })
        .collect();

    if items.is_empty() {
        return format!(
            "{encoder} : {type_name} -> Value\n{encoder} _ =\n    Encode.list identity []"
        );
    }

    format!(
        "{encoder} : {type_name} -> Value\n{encoder} {argument} =\n    Encode.list identity\n        [ {}\n        ]",
        items.join("\n        , ")
    )
}

fn render_union(def: &UnionDef, schema: &SchemaDefinition) -> Option<String> {
    if def.types.is_empty() {
        return None;
    }
    let type_name = names::type_name(&def.path, &schema.title);
    let encoder = names::encoder_name(&def.path, &schema.title);
    let argument = type_name.to_lower_camel_case();

    let arms: Vec<String> = def
        .types
        .iter()
        .map(|kind| {
            let constructor = union_constructor(&type_name, *kind);
            if *kind == PrimitiveKind::Null {
                format!("        {constructor} ->\n            Encode.null")
            } else {
                format!(
                    "        {constructor} value ->\n            {} value",
                    primitive_encoder(*kind)
                )
            }
        })
        .collect();

    Some(format!(
        "{encoder} : {type_name} -> Value\n{encoder} {argument} =\n    case {argument} of\n{}",
        arms.join("\n\n")
    ))
}

fn render_composition(
    def: &CompositionDef,
    schema: &SchemaDefinition,
    mapper: &mut TypeMapper<'_>,
) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let encoder = names::encoder_name(&def.path, &schema.title);
    let argument = type_name.to_lower_camel_case();

    if def.kind == CompositionKind::AllOf {
        // Merge the alternatives' association lists into one object.
        let mut groups = Vec::new();
        for (field, identifier) in allof_fields(def, mapper) {
            match mapper.pairs_use_site(&identifier) {
                Some(pairs) => groups.push(format!("{pairs} {argument}.{field}")),
                None => {
                    let elm = mapper.use_site(&identifier);
                    groups.push(format!(
                        "[ ( \"{}\", {} {}.{} ) ]",
                        field, elm.encoder, argument, field
                    ));
                }
            }
        }
        let body = if groups.is_empty() {
            "    Encode.object []".to_string()
        } else {
            format!(
                "    [ {}\n    ]\n        |> List.concat\n        |> Encode.object",
                groups.join("\n    , ")
            )
        };
        return format!("{encoder} : {type_name} -> Value\n{encoder} {argument} =\n{body}");
    }

    let arms: Vec<String> = def
        .alternatives
        .iter()
        .map(|alternative| {
            let identifier = TypeIdentifier::Path(alternative.clone());
            if mapper.is_null(&identifier) {
                return format!("        {type_name}Null ->\n            Encode.null");
            }
            let constructor =
                composition_constructor(&type_name, &mapper.alternative_name(&identifier));
            let elm = mapper.use_site(&identifier);
            format!(
                "        {constructor} value ->\n            {} value",
                elm.encoder
            )
        })
        .collect();

    format!(
        "{encoder} : {type_name} -> Value\n{encoder} {argument} =\n    case {argument} of\n{}",
        arms.join("\n\n")
    )
}

fn encode_literal(base: PrimitiveKind, value: &serde_json::Value) -> String {
    match (base, value) {
        (PrimitiveKind::String, serde_json::Value::String(text)) => {
            format!("Encode.string \"{text}\"")
        }
        (PrimitiveKind::Integer, _) => format!("Encode.int {value}"),
        (PrimitiveKind::Number, _) => format!("Encode.float {value}"),
        (PrimitiveKind::Boolean, serde_json::Value::Bool(true)) => "Encode.bool True".to_string(),
        (PrimitiveKind::Boolean, serde_json::Value::Bool(false)) => "Encode.bool False".to_string(),
        (PrimitiveKind::Null, _) => "Encode.null".to_string(),
        // Value of the wrong runtime type; already reported by the parser.
        (_, other) => format!("Encode.string \"{other}\""),
    }
}
