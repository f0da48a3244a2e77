use std::collections::HashSet;

use jsgen_core::error::{Diagnostic, DiagnosticKind};
use jsgen_core::ir::{
    PrimitiveKind, SchemaDefinition, SchemaDictionary, TypeDef, TypeIdentifier,
};
use jsgen_core::resolve::{Resolved, Resolver, Unresolved};

use crate::names;

/// How a type is spelled at a use site: its annotation, a decoder
/// expression, and an encoder expression (a function `a -> Value`).
/// Compound expressions come pre-parenthesized.
#[derive(Debug, Clone)]
pub struct ElmRef {
    pub annotation: String,
    pub decoder: String,
    pub encoder: String,
}

/// Maps resolved IR nodes to their Elm spellings, qualifying cross-schema
/// references, collecting imports in first-occurrence order, and recording
/// resolution diagnostics (once per identifier).
pub struct TypeMapper<'a> {
    resolver: Resolver<'a>,
    current: &'a SchemaDefinition,
    root_module: &'a str,
    pub imports: Vec<String>,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
    reported: HashSet<String>,
}

impl<'a> TypeMapper<'a> {
    pub fn new(
        current: &'a SchemaDefinition,
        schemas: &'a SchemaDictionary,
        root_module: &'a str,
    ) -> Self {
        Self {
            resolver: Resolver::new(schemas),
            current,
            root_module,
            imports: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            reported: HashSet::new(),
        }
    }

    /// The Elm spelling of `identifier` at a use site. Unresolved
    /// identifiers map to the `Unknown` placeholder and a diagnostic.
    pub fn use_site(&mut self, identifier: &TypeIdentifier) -> ElmRef {
        match self.resolver.resolve(identifier, self.current) {
            Ok(resolved) => self.resolved_ref(resolved),
            Err(unresolved) => {
                self.report(identifier, &unresolved);
                unknown_ref()
            }
        }
    }

    /// The association-list helper for an object-typed identifier
    /// (`circlePairs`, possibly qualified), or `None` when the identifier
    /// does not resolve to an object.
    pub fn pairs_use_site(&mut self, identifier: &TypeIdentifier) -> Option<String> {
        match self.resolver.resolve(identifier, self.current) {
            Ok(resolved) if matches!(resolved.node, TypeDef::Object(_)) => {
                let qualifier = self.qualifier(resolved.schema);
                Some(format!(
                    "{}{}",
                    qualifier,
                    names::pairs_name(resolved.node.path(), &resolved.schema.title)
                ))
            }
            _ => None,
        }
    }

    /// The unqualified Elm type name of whatever `identifier` resolves to.
    /// Used for constructor names of composition alternatives.
    pub fn alternative_name(&mut self, identifier: &TypeIdentifier) -> String {
        match self.resolver.resolve(identifier, self.current) {
            Ok(resolved) => match resolved.node {
                TypeDef::Primitive(primitive) => primitive_type(primitive.kind).to_string(),
                node => names::type_name(node.path(), &resolved.schema.title),
            },
            Err(_) => "Unknown".to_string(),
        }
    }

    /// Whether `identifier` resolves to the `null` primitive.
    pub fn is_null(&mut self, identifier: &TypeIdentifier) -> bool {
        matches!(
            self.resolver.resolve(identifier, self.current),
            Ok(Resolved {
                node: TypeDef::Primitive(primitive),
                ..
            }) if primitive.kind == PrimitiveKind::Null
        )
    }

    fn resolved_ref(&mut self, resolved: Resolved<'a>) -> ElmRef {
        let schema = resolved.schema;
        match resolved.node {
            TypeDef::Primitive(primitive) => primitive_ref(primitive.kind),
            TypeDef::Enum(def) => {
                let qualifier = self.qualifier(schema);
                let base = primitive_decoder(def.base);
                let decoder_fn = names::decoder_name(&def.path, &schema.title);
                ElmRef {
                    annotation: format!(
                        "{}{}",
                        qualifier,
                        names::type_name(&def.path, &schema.title)
                    ),
                    decoder: format!("({base} |> Decode.andThen {qualifier}{decoder_fn})"),
                    encoder: format!(
                        "{}{}",
                        qualifier,
                        names::encoder_name(&def.path, &schema.title)
                    ),
                }
            }
            TypeDef::Definitions(def) => {
                self.report_once(
                    def.path.pointer(),
                    DiagnosticKind::UnresolvedReference,
                    format!("definitions group `{}` cannot be used as a type", def.name),
                );
                unknown_ref()
            }
            node => {
                let qualifier = self.qualifier(schema);
                ElmRef {
                    annotation: format!(
                        "{}{}",
                        qualifier,
                        names::type_name(node.path(), &schema.title)
                    ),
                    decoder: format!(
                        "{}{}",
                        qualifier,
                        names::decoder_name(node.path(), &schema.title)
                    ),
                    encoder: format!(
                        "{}{}",
                        qualifier,
                        names::encoder_name(node.path(), &schema.title)
                    ),
                }
            }
        }
    }

    /// Module qualifier for a schema: empty for the current one, otherwise
    /// `<Root>.<Title>.` with the import recorded on first use.
    fn qualifier(&mut self, schema: &SchemaDefinition) -> String {
        if schema.id == self.current.id {
            return String::new();
        }
        let module = names::qualified_module(self.root_module, &schema.title);
        if !self.imports.contains(&module) {
            self.imports.push(module.clone());
        }
        format!("{module}.")
    }

    fn report(&mut self, identifier: &TypeIdentifier, unresolved: &Unresolved) {
        // Key the diagnostic on the failing target, so several use sites of
        // the same dangling reference surface once.
        let (kind, target) = match unresolved {
            Unresolved::NotFound(target) => (DiagnosticKind::UnresolvedReference, target),
            Unresolved::Cyclic(target) => (DiagnosticKind::CyclicReference, target),
        };
        self.report_once(
            target.clone(),
            kind,
            format!("cannot resolve `{identifier}`: {unresolved}"),
        );
    }

    fn report_once(&mut self, identifier: String, kind: DiagnosticKind, message: String) {
        if !self.reported.insert(identifier.clone()) {
            return;
        }
        self.errors.push(Diagnostic::new(kind, identifier, message));
    }
}

fn unknown_ref() -> ElmRef {
    ElmRef {
        annotation: "Unknown".to_string(),
        decoder: "(Decode.fail \"unresolved reference\")".to_string(),
        encoder: "(\\_ -> Encode.null)".to_string(),
    }
}

/// Target-language mapping of the primitive base types.
pub fn primitive_type(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::String => "String",
        PrimitiveKind::Integer => "Int",
        PrimitiveKind::Number => "Float",
        PrimitiveKind::Boolean => "Bool",
        PrimitiveKind::Null => "()",
    }
}

pub fn primitive_decoder(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::String => "Decode.string",
        PrimitiveKind::Integer => "Decode.int",
        PrimitiveKind::Number => "Decode.float",
        PrimitiveKind::Boolean => "Decode.bool",
        PrimitiveKind::Null => "(Decode.null ())",
    }
}

pub fn primitive_encoder(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::String => "Encode.string",
        PrimitiveKind::Integer => "Encode.int",
        PrimitiveKind::Number => "Encode.float",
        PrimitiveKind::Boolean => "Encode.bool",
        PrimitiveKind::Null => "(\\_ -> Encode.null)",
    }
}

fn primitive_ref(kind: PrimitiveKind) -> ElmRef {
    ElmRef {
        annotation: primitive_type(kind).to_string(),
        decoder: primitive_decoder(kind).to_string(),
        encoder: primitive_encoder(kind).to_string(),
    }
}
