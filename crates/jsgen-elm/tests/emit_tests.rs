use jsgen_core::config::GenerateConfig;
use jsgen_core::error::DiagnosticKind;
use jsgen_elm::ElmEmitter;
use serde_json::json;

const DEFINITIONS: &str = include_str!("fixtures/definitions.json");
const CIRCLE: &str = include_str!("fixtures/circle.json");
const POINT: &str = include_str!("fixtures/point.json");
const DANGLING: &str = include_str!("fixtures/dangling-circle.json");
const PRIMITIVE: &str = include_str!("fixtures/primitive.json");

fn documents(fixtures: &[(&str, &str)]) -> Vec<(String, serde_json::Value)> {
    fixtures
        .iter()
        .map(|(uri, content)| (uri.to_string(), serde_json::from_str(content).unwrap()))
        .collect()
}

fn generate(
    fixtures: &[(&str, &str)],
    root_module: &str,
) -> jsgen_core::SchemaResult {
    let config = GenerateConfig {
        root_module: root_module.to_string(),
        ..GenerateConfig::default()
    };
    jsgen_core::generate(&documents(fixtures), &ElmEmitter, &config).unwrap()
}

#[test]
fn primitive_schema_emits_header_only() {
    let result = generate(&[("http://example.com/n.json", PRIMITIVE)], "");
    assert!(result.errors.is_empty());

    let content = &result.files["N.elm"];
    assert!(content.starts_with("module N exposing (..)"));
    // Primitives are inlined at use sites; nothing standalone.
    assert!(!content.contains("type alias"));
    assert!(!content.contains("Decode.succeed"), "no decoder expected:\n{content}");
}

#[test]
fn enum_round_trip() {
    let result = generate(
        &[("http://example.com/definitions.json", DEFINITIONS)],
        "",
    );
    assert!(result.errors.is_empty());

    let content = &result.files["Definitions.elm"];

    // One nullary constructor per value, capitalized.
    assert!(content.contains("type Color\n    = Red\n    | Yellow\n    | Green\n    | Blue"));

    // Decoder interprets the raw string and fails with the literal text.
    assert!(content.contains("colorDecoder : String -> Decoder Color"));
    assert!(content.contains("Decode.fail <| \"Unknown color type: \" ++ color"));
    assert!(content.contains("\"red\" ->\n            Decode.succeed Red"));

    // Encoder maps constructors back to their literals.
    assert!(content.contains("encodeColor : Color -> Value"));
    assert!(content.contains("Red ->\n            Encode.string \"red\""));
}

#[test]
fn object_required_and_optional_fields() {
    let result = generate(&[("http://example.com/point.json", POINT)], "");
    assert!(result.errors.is_empty());

    let content = &result.files["Point.elm"];

    // x required, y optional.
    assert!(content.contains("type alias Point =\n    { x : Float\n    , y : Maybe Float\n    }"));

    // Pipeline decoder in field order, null-as-missing for the optional.
    assert!(content.contains("|> required \"x\" Decode.float"));
    assert!(content.contains("|> optional \"y\" (Decode.nullable Decode.float) Nothing"));
    let x_at = content.find("required \"x\"").unwrap();
    let y_at = content.find("optional \"y\"").unwrap();
    assert!(x_at < y_at);

    // Encoder emits x unconditionally, y only when present.
    assert!(content.contains("[ ( \"x\", Encode.float point.x ) ]"));
    assert!(content.contains("point.y\n        |> Maybe.map (\\value -> [ ( \"y\", Encode.float value ) ])\n        |> Maybe.withDefault []"));
}

#[test]
fn cross_schema_references_are_qualified() {
    let result = generate(
        &[
            ("http://example.com/definitions.json", DEFINITIONS),
            ("http://example.com/circle.json", CIRCLE),
        ],
        "Data",
    );
    assert!(result.errors.is_empty());

    assert!(result.files.contains_key("Data/Definitions.elm"));
    let content = &result.files["Data/Circle.elm"];

    assert!(content.starts_with("module Data.Circle exposing (..)"));
    assert!(content.contains("import Data.Definitions"));

    // Use sites are module-qualified.
    assert!(content.contains("center : Data.Definitions.Point"));
    assert!(content.contains("color : Maybe Data.Definitions.Color"));
    assert!(content.contains("|> required \"center\" Data.Definitions.pointDecoder"));
    assert!(content.contains(
        "(Decode.string |> Decode.andThen Data.Definitions.colorDecoder)"
    ));
    assert!(content.contains("Data.Definitions.encodePoint circle.center"));
}

#[test]
fn dangling_reference_emits_placeholder_and_one_diagnostic() {
    let result = generate(
        &[
            ("http://example.com/definitions.json", DEFINITIONS),
            ("http://example.com/dangling-circle.json", DANGLING),
        ],
        "Data",
    );

    // Output still emits, with the placeholder at the use site.
    let content = &result.files["Data/Circle.elm"];
    assert!(content.contains("center : Unknown"));
    assert!(content.contains("Decode.fail \"unresolved reference\""));

    let unresolved: Vec<_> = result
        .errors
        .iter()
        .filter(|d| d.kind == DiagnosticKind::UnresolvedReference)
        .collect();
    assert_eq!(unresolved.len(), 1);
    assert!(unresolved[0]
        .identifier
        .contains("http://example.com/definitions.json#square"));
}

#[test]
fn definitions_module_emits_both_types() {
    let result = generate(
        &[("http://example.com/definitions.json", DEFINITIONS)],
        "Data",
    );
    assert!(result.errors.is_empty());

    let content = &result.files["Data/Definitions.elm"];
    // Lexicographic walk: color before point.
    let color_at = content.find("type Color").unwrap();
    let point_at = content.find("type alias Point").unwrap();
    assert!(color_at < point_at);

    // Object encoder exposes the association-list helper.
    assert!(content.contains("pointPairs : Point -> List ( String, Value )"));
    assert!(content.contains("encodePoint : Point -> Value"));
}

#[test]
fn emission_is_deterministic() {
    let fixtures = [
        ("http://example.com/definitions.json", DEFINITIONS),
        ("http://example.com/circle.json", CIRCLE),
    ];
    let first = generate(&fixtures, "Data");
    let second = generate(&fixtures, "Data");
    assert_eq!(first.files, second.files);
}

#[test]
fn strict_escalates_warnings() {
    let config = GenerateConfig {
        strict: true,
        ..GenerateConfig::default()
    };
    let result = jsgen_core::generate(
        &documents(&[("http://example.com/n.json", PRIMITIVE)]),
        &ElmEmitter,
        &config,
    )
    .unwrap();
    assert!(result.warnings.is_empty());
}

#[test]
fn cyclic_reference_reported_at_emission() {
    let document = json!({
        "id": "http://example.com/loop.json",
        "title": "Loop",
        "type": "object",
        "properties": {
            "next": { "$ref": "#/next" }
        },
        "required": ["next"]
    });

    let result = jsgen_core::generate(
        &[("http://example.com/loop.json".to_string(), document)],
        &ElmEmitter,
        &GenerateConfig::default(),
    )
    .unwrap();

    // The module still emits, with the placeholder at the cyclic use site.
    let content = &result.files["Loop.elm"];
    assert!(content.contains("next : Unknown"));
    assert!(result
        .errors
        .iter()
        .any(|d| d.kind == DiagnosticKind::CyclicReference));
}

#[test]
fn union_emits_sum_type() {
    let document = json!({
        "id": "http://example.com/scalar.json",
        "title": "Scalar",
        "type": "object",
        "properties": {
            "amount": { "type": ["integer", "string", "null"] }
        },
        "required": ["amount"]
    });

    let result = jsgen_core::generate(
        &[("http://example.com/scalar.json".to_string(), document)],
        &ElmEmitter,
        &GenerateConfig::default(),
    )
    .unwrap();
    assert!(result.errors.is_empty());

    let content = &result.files["Scalar.elm"];
    assert!(content.contains(
        "type Amount\n    = AmountInteger Int\n    | AmountString String\n    | AmountNull"
    ));
    assert!(content.contains("Decode.map AmountInteger Decode.int"));
    assert!(content.contains("Decode.null AmountNull"));
    assert!(content.contains("AmountNull ->\n            Encode.null"));
}

#[test]
fn one_of_emits_alternatives() {
    let document = json!({
        "id": "http://example.com/shape.json",
        "title": "Shape",
        "oneOf": [
            { "$ref": "http://example.com/definitions.json#point" },
            { "type": "number" }
        ]
    });

    let result = jsgen_core::generate(
        &[
            (
                "http://example.com/definitions.json".to_string(),
                serde_json::from_str(DEFINITIONS).unwrap(),
            ),
            ("http://example.com/shape.json".to_string(), document),
        ],
        &ElmEmitter,
        &GenerateConfig::default(),
    )
    .unwrap();
    assert!(result.errors.is_empty());

    let content = &result.files["Shape.elm"];
    assert!(content.contains("type Shape\n    = ShapePoint Definitions.Point\n    | ShapeFloat Float"));
    assert!(content.contains("Decode.map ShapePoint Definitions.pointDecoder"));
    assert!(content.contains("Decode.map ShapeFloat Decode.float"));
    assert!(content.contains("import Definitions"));
}

#[test]
fn all_of_merges_pair_lists() {
    let document = json!({
        "id": "http://example.com/fancy.json",
        "title": "FancyCircle",
        "allOf": [
            { "$ref": "http://example.com/definitions.json#point" },
            {
                "type": "object",
                "properties": { "label": { "type": "string" } },
                "required": ["label"]
            }
        ]
    });

    let result = jsgen_core::generate(
        &[
            (
                "http://example.com/definitions.json".to_string(),
                serde_json::from_str(DEFINITIONS).unwrap(),
            ),
            ("http://example.com/fancy.json".to_string(), document),
        ],
        &ElmEmitter,
        &GenerateConfig::default(),
    )
    .unwrap();
    assert!(result.errors.is_empty());

    let content = &result.files["FancyCircle.elm"];

    // Record with one field per alternative.
    assert!(content.contains("type alias FancyCircle ="));
    assert!(content.contains("point : Definitions.Point"));

    // Decoder applies every alternative to the same value.
    assert!(content.contains("|> custom Definitions.pointDecoder"));

    // Encoder concatenates the alternatives' association lists.
    assert!(content.contains("Definitions.pointPairs fancyCircle.point"));
    assert!(content.contains("|> List.concat\n        |> Encode.object"));
}

#[test]
fn array_property_emits_list_alias() {
    let document = json!({
        "id": "http://example.com/tagged.json",
        "title": "Tagged",
        "type": "object",
        "properties": {
            "tags": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["tags"]
    });

    let result = jsgen_core::generate(
        &[("http://example.com/tagged.json".to_string(), document)],
        &ElmEmitter,
        &GenerateConfig::default(),
    )
    .unwrap();
    assert!(result.errors.is_empty());

    let content = &result.files["Tagged.elm"];
    assert!(content.contains("type alias Tags =\n    List String"));
    assert!(content.contains("tagsDecoder : Decoder Tags\ntagsDecoder =\n    Decode.list Decode.string"));
    assert!(content.contains("encodeTags : Tags -> Value\nencodeTags tags =\n    Encode.list Encode.string tags"));
    // The object field uses the alias.
    assert!(content.contains("tags : Tags"));
    assert!(content.contains("|> required \"tags\" tagsDecoder"));
}

#[test]
fn tuple_emits_indexed_record() {
    let document = json!({
        "id": "http://example.com/segment.json",
        "title": "Segment",
        "type": "array",
        "items": [{ "type": "number" }, { "type": "number" }]
    });

    let result = jsgen_core::generate(
        &[("http://example.com/segment.json".to_string(), document)],
        &ElmEmitter,
        &GenerateConfig::default(),
    )
    .unwrap();
    assert!(result.errors.is_empty());

    let content = &result.files["Segment.elm"];
    assert!(content.contains("type alias Segment =\n    { item0 : Float\n    , item1 : Float\n    }"));
    assert!(content.contains("|> custom (Decode.index 0 Decode.float)"));
    assert!(content.contains("|> custom (Decode.index 1 Decode.float)"));
    assert!(content.contains("Encode.list identity"));
    assert!(content.contains("Encode.float segment.item0"));
}
