use std::fmt;

use thiserror::Error;

/// Hard failures that abort parsing of a single document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document root is not a JSON object: {0}")]
    InvalidDocument(String),

    #[error("document URI is not a valid absolute URI: {0}")]
    InvalidDocumentUri(String),

    #[error("could not classify document root: {0}")]
    UnclassifiableRoot(String),
}

/// A recoverable finding surfaced to the caller instead of aborting the run.
///
/// Diagnostics are ordered: schema processing order first, then DFS
/// traversal order within a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Path or URI string of the node the finding is about.
    pub identifier: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.identifier, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnknownNodeType,
    DuplicateTypeKey,
    UnresolvedReference,
    CyclicReference,
    InvalidEnumValue,
    InvalidIdUri,
    MissingRequiredPropertyTarget,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownNodeType => "unknown_node_type",
            DiagnosticKind::DuplicateTypeKey => "duplicate_type_key",
            DiagnosticKind::UnresolvedReference => "unresolved_reference",
            DiagnosticKind::CyclicReference => "cyclic_reference",
            DiagnosticKind::InvalidEnumValue => "invalid_enum_value",
            DiagnosticKind::InvalidIdUri => "invalid_id_uri",
            DiagnosticKind::MissingRequiredPropertyTarget => "missing_required_property_target",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Truncated JSON rendering of a node, used to identify offending input in
/// `unknown_node_type` diagnostics.
pub(crate) fn fingerprint(node: &serde_json::Value) -> String {
    const MAX: usize = 120;
    let rendered = node.to_string();
    if rendered.len() <= MAX {
        rendered
    } else {
        let mut cut = MAX;
        while !rendered.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…", &rendered[..cut])
    }
}
