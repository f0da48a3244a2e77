use jsgen_core::ir::{
    ArrayDef, CompositionDef, CompositionKind, EnumDef, ObjectDef, PrimitiveKind,
    SchemaDefinition, TupleDef, TypeDef, TypeIdentifier, UnionDef,
};

use crate::names;
use crate::type_mapper::{primitive_type, TypeMapper};

use super::types::{
    allof_fields, composition_constructor, ordered_properties, union_constructor,
};

/// Render the decoder for one IR node, or `None` for kinds without one.
pub fn render_decoder(
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
    let decoder = names::decoder_name(&def.path, &schema.title);

    let mut steps = Vec::new();
    for (property, target) in ordered_properties(def) {
        let elm = mapper.use_site(&TypeIdentifier::Path(target.clone()));
        if def.required.contains(property) {
            steps.push(format!("        |> required \"{}\" {}", property, elm.decoder));
        } else {
            // Null counts as missing.
            steps.push(format!(
                "        |> optional \"{}\" (Decode.nullable {}) Nothing",
                property, elm.decoder
            ));
        }
    }

    let mut body = format!("    Decode.succeed {type_name}");
    for step in steps {
        body.push('\n');
        body.push_str(&step);
    }

    format!("{decoder} : Decoder {type_name}\n{decoder} =\n{body}")
}

fn render_enum(def: &EnumDef, schema: &SchemaDefinition) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let decoder = names::decoder_name(&def.path, &schema.title);
    let argument = names::field_name(&names::display_name(&def.path, &schema.title));
    let base_type = primitive_type(def.base);

    match def.base {
        PrimitiveKind::String | PrimitiveKind::Integer => {
            let mut arms = Vec::new();
            for value in &def.values {
                let constructor = names::enum_constructor(&type_name, value);
                arms.push(format!(
                    "        {} ->\n            Decode.succeed {}",
                    literal(value),
                    constructor
                ));
            }
            arms.push(format!(
                "        _ ->\n            Decode.fail <| \"Unknown {} type: \" ++ {}",
                def.name,
                to_string_expr(def.base, &argument)
            ));
            format!(
                "{decoder} : {base_type} -> Decoder {type_name}\n{decoder} {argument} =\n    case {argument} of\n{}",
                arms.join("\n\n")
            )
        }
        _ => {
            // Floats and booleans cannot appear in case patterns.
            let mut branches = String::new();
            for value in &def.values {
                let constructor = names::enum_constructor(&type_name, value);
                let keyword = if branches.is_empty() { "if" } else { "else if" };
                branches.push_str(&format!(
                    "    {keyword} {argument} == {} then\n        Decode.succeed {}\n\n",
                    literal(value),
                    constructor
                ));
            }
            branches.push_str(&format!(
                "    else\n        Decode.fail <| \"Unknown {} type: \" ++ {}",
                def.name,
                to_string_expr(def.base, &argument)
            ));
            format!(
                "{decoder} : {base_type} -> Decoder {type_name}\n{decoder} {argument} =\n{branches}"
            )
        }
    }
}

fn render_array(def: &ArrayDef, schema: &SchemaDefinition, mapper: &mut TypeMapper<'_>) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let decoder = names::decoder_name(&def.path, &schema.title);
    let item = mapper.use_site(&TypeIdentifier::Path(def.items.clone()));
    format!(
        "{decoder} : Decoder {type_name}\n{decoder} =\n    Decode.list {}",
        item.decoder
    )
}

fn render_tuple(def: &TupleDef, schema: &SchemaDefinition, mapper: &mut TypeMapper<'_>) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let decoder = names::decoder_name(&def.path, &schema.title);

    let mut body = format!("    Decode.succeed {type_name}");
    for (index, item) in def.items.iter().enumerate() {
        let elm = mapper.use_site(&TypeIdentifier::Path(item.clone()));
        body.push_str(&format!(
            "\n        |> custom (Decode.index {} {})",
            index, elm.decoder
        ));
    }

    format!("{decoder} : Decoder {type_name}\n{decoder} =\n{body}")
}

fn render_union(def: &UnionDef, schema: &SchemaDefinition) -> Option<String> {
    if def.types.is_empty() {
        return None;
    }
    let type_name = names::type_name(&def.path, &schema.title);
    let decoder = names::decoder_name(&def.path, &schema.title);

    let alternatives: Vec<String> = def
        .types
        .iter()
        .map(|kind| {
            let constructor = union_constructor(&type_name, *kind);
            if *kind == PrimitiveKind::Null {
                format!("Decode.null {constructor}")
            } else {
                format!(
                    "Decode.map {} {}",
                    constructor,
                    crate::type_mapper::primitive_decoder(*kind)
                )
            }
        })
        .collect();

    Some(format!(
        "{decoder} : Decoder {type_name}\n{decoder} =\n    Decode.oneOf\n        [ {}\n        ]",
        alternatives.join("\n        , ")
    ))
}

fn render_composition(
    def: &CompositionDef,
    schema: &SchemaDefinition,
    mapper: &mut TypeMapper<'_>,
) -> String {
    let type_name = names::type_name(&def.path, &schema.title);
    let decoder = names::decoder_name(&def.path, &schema.title);

    if def.kind == CompositionKind::AllOf {
        // Every alternative decodes the same value.
        let mut body = format!("    Decode.succeed {type_name}");
        for (_, identifier) in allof_fields(def, mapper) {
            let elm = mapper.use_site(&identifier);
            body.push_str(&format!("\n        |> custom {}", elm.decoder));
        }
        return format!("{decoder} : Decoder {type_name}\n{decoder} =\n{body}");
    }

    let alternatives: Vec<String> = def
        .alternatives
        .iter()
        .map(|alternative| {
            let identifier = TypeIdentifier::Path(alternative.clone());
            if mapper.is_null(&identifier) {
                return format!("Decode.null {type_name}Null");
            }
            let constructor =
                composition_constructor(&type_name, &mapper.alternative_name(&identifier));
            let elm = mapper.use_site(&identifier);
            format!("Decode.map {} {}", constructor, elm.decoder)
        })
        .collect();

    format!(
        "{decoder} : Decoder {type_name}\n{decoder} =\n    Decode.oneOf\n        [ {}\n        ]",
        alternatives.join("\n        , ")
    )
}

fn literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => format!("\"{text}\""),
        serde_json::Value::Bool(true) => "True".to_string(),
        serde_json::Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

fn to_string_expr(base: PrimitiveKind, argument: &str) -> String {
    match base {
        PrimitiveKind::String => argument.to_string(),
        PrimitiveKind::Integer => format!("String.fromInt {argument}"),
        PrimitiveKind::Number => format!("String.fromFloat {argument}"),
        PrimitiveKind::Boolean => {
            format!("(if {argument} then \"True\" else \"False\")")
        }
        PrimitiveKind::Null => "\"null\"".to_string(),
    }
}
