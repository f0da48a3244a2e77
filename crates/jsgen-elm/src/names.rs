use heck::{ToLowerCamelCase, ToPascalCase};
use jsgen_core::path::SchemaPath;

/// Elm module name for a schema title: capitalized, non-word chars stripped.
pub fn module_name(title: &str) -> String {
    title.to_pascal_case()
}

/// Fully qualified module name under the root prefix, e.g. `Data.Circle`.
pub fn qualified_module(root_module: &str, title: &str) -> String {
    if root_module.is_empty() {
        module_name(title)
    } else {
        format!("{}.{}", root_module, module_name(title))
    }
}

/// Output file key, e.g. `Data/Circle.elm`.
pub fn file_path(root_module: &str, title: &str) -> String {
    let mut parts: Vec<String> = root_module
        .split('.')
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect();
    parts.push(format!("{}.elm", module_name(title)));
    parts.join("/")
}

/// The name a node is displayed under: the schema title for the root node,
/// and the parent's display name as prefix for purely numeric names
/// (tuple and composition children), so identifiers stay valid.
pub fn display_name(path: &SchemaPath, title: &str) -> String {
    let Some(parent) = path.parent() else {
        return title.to_string();
    };
    let name = path.name();
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
        format!("{}{}", display_name(&parent, title), name)
    } else {
        name.to_string()
    }
}

pub fn type_name(path: &SchemaPath, title: &str) -> String {
    display_name(path, title).to_pascal_case()
}

pub fn decoder_name(path: &SchemaPath, title: &str) -> String {
    format!("{}Decoder", display_name(path, title).to_lower_camel_case())
}

pub fn encoder_name(path: &SchemaPath, title: &str) -> String {
    format!("encode{}", type_name(path, title))
}

/// Name of the association-list helper emitted next to object encoders.
pub fn pairs_name(path: &SchemaPath, title: &str) -> String {
    format!("{}Pairs", display_name(path, title).to_lower_camel_case())
}

/// Record field or argument name.
pub fn field_name(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Constructor for one enum value. String values capitalize directly;
/// anything else (and strings starting with a digit) gets the enum's type
/// name as prefix.
pub fn enum_constructor(enum_type: &str, value: &serde_json::Value) -> String {
    match value.as_str() {
        Some(text) if !text.starts_with(|c: char| c.is_ascii_digit()) => text.to_pascal_case(),
        Some(text) => format!("{}{}", enum_type, text.to_pascal_case()),
        None => {
            let literal = value.to_string().replace(['.', '-'], "_");
            format!("{}{}", enum_type, literal)
        }
    }
}

/// Wrap a multi-token annotation or expression in parentheses.
pub fn parenthesize(expr: &str) -> String {
    if expr.contains(' ') && !(expr.starts_with('(') && expr.ends_with(')')) {
        format!("({expr})")
    } else {
        expr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name_strips_non_word() {
        assert_eq!(module_name("definitions"), "Definitions");
        assert_eq!(module_name("fancy circle!"), "FancyCircle");
    }

    #[test]
    fn test_qualified_module() {
        assert_eq!(qualified_module("", "circle"), "Circle");
        assert_eq!(qualified_module("Data", "circle"), "Data.Circle");
    }

    #[test]
    fn test_file_path() {
        assert_eq!(file_path("", "Circle"), "Circle.elm");
        assert_eq!(file_path("Data", "Circle"), "Data/Circle.elm");
        assert_eq!(file_path("Data.Gen", "Circle"), "Data/Gen/Circle.elm");
    }

    #[test]
    fn test_display_name_root_uses_title() {
        assert_eq!(display_name(&SchemaPath::root(), "Circle"), "Circle");
    }

    #[test]
    fn test_display_name_numeric_child() {
        let alt = SchemaPath::root().child("0");
        assert_eq!(display_name(&alt, "FancyCircle"), "FancyCircle0");
    }

    #[test]
    fn test_decoder_and_encoder_names() {
        let color = SchemaPath::root().child("definitions").child("color");
        assert_eq!(type_name(&color, "Definitions"), "Color");
        assert_eq!(decoder_name(&color, "Definitions"), "colorDecoder");
        assert_eq!(encoder_name(&color, "Definitions"), "encodeColor");
        assert_eq!(pairs_name(&color, "Definitions"), "colorPairs");
    }

    #[test]
    fn test_enum_constructor() {
        assert_eq!(enum_constructor("Color", &serde_json::json!("red")), "Red");
        assert_eq!(
            enum_constructor("Color", &serde_json::json!("deep-red")),
            "DeepRed"
        );
        assert_eq!(enum_constructor("Answer", &serde_json::json!(42)), "Answer42");
        assert_eq!(
            enum_constructor("Answer", &serde_json::json!("3d")),
            "Answer3d"
        );
    }

    #[test]
    fn test_parenthesize() {
        assert_eq!(parenthesize("Decode.float"), "Decode.float");
        assert_eq!(parenthesize("List String"), "(List String)");
        assert_eq!(parenthesize("(already wrapped)"), "(already wrapped)");
    }
}
