use std::fmt;

/// Root marker segment of every schema path.
pub const ROOT_MARKER: &str = "#";

/// A JSON-pointer-like path identifying a node within one schema document.
///
/// The first segment is always the root marker `#`; `#/definitions/point`
/// parses to `["#", "definitions", "point"]`. Segments are compared as raw
/// strings; no percent-decoding is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaPath {
    segments: Vec<String>,
}

impl SchemaPath {
    /// The document root path, `["#"]`.
    pub fn root() -> Self {
        Self {
            segments: vec![ROOT_MARKER.to_string()],
        }
    }

    /// Parse a pointer string like `#/definitions/point`.
    ///
    /// Canonicalizes on ingest: a missing root marker is inserted, so
    /// `"#"`, `""` and `"#/"` all yield the root path. A fragment-only
    /// pointer like `"#color"` keeps its single segment; the resolver
    /// treats it as an alias into the current document.
    pub fn from_pointer(pointer: &str) -> Self {
        let mut segments: Vec<String> = pointer
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        match segments.first() {
            None => return Self::root(),
            Some(first) if !first.starts_with(ROOT_MARKER) => {
                segments.insert(0, ROOT_MARKER.to_string());
            }
            _ => {}
        }
        Self { segments }
    }

    /// The path of a child node named `name`.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// The parent path, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() <= 1 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Last segment; `#` for the root path.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or(ROOT_MARKER)
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The pointer-string form used as a type dictionary key.
    pub fn pointer(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pointer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_pointer() {
        assert_eq!(SchemaPath::root().pointer(), "#");
        assert_eq!(SchemaPath::from_pointer("#"), SchemaPath::root());
    }

    #[test]
    fn test_round_trip() {
        for pointer in ["#", "#/a", "#/definitions/point", "#/definitions/point/x"] {
            let path = SchemaPath::from_pointer(pointer);
            assert_eq!(path.pointer(), *pointer);
            assert_eq!(SchemaPath::from_pointer(&path.pointer()), path);
        }
    }

    #[test]
    fn test_canonicalizes_missing_root() {
        assert_eq!(SchemaPath::from_pointer(""), SchemaPath::root());
        assert_eq!(SchemaPath::from_pointer("#/"), SchemaPath::root());
        assert_eq!(
            SchemaPath::from_pointer("definitions/point").pointer(),
            "#/definitions/point"
        );
    }

    #[test]
    fn test_fragment_only_pointer_round_trips() {
        let fragment = SchemaPath::from_pointer("#color");
        assert_eq!(fragment.pointer(), "#color");
        assert_eq!(fragment.segments().len(), 1);
    }

    #[test]
    fn test_child_and_parent() {
        let point = SchemaPath::root().child("definitions").child("point");
        assert_eq!(point.pointer(), "#/definitions/point");
        assert_eq!(point.name(), "point");
        assert_eq!(point.parent().unwrap().pointer(), "#/definitions");
        assert_eq!(SchemaPath::root().parent(), None);
    }

    #[test]
    fn test_is_root() {
        assert!(SchemaPath::root().is_root());
        assert!(!SchemaPath::root().child("a").is_root());
    }
}
