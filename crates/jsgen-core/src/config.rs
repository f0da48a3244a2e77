use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Options consumed by the generate driver and emitters.
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Module prefix applied to every emitted module, e.g. `Data`.
    pub root_module: String,
    pub emit_sort: EmitSort,
    /// Escalate every warning to an error.
    pub strict: bool,
}

/// How an emitter orders the type dictionary walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitSort {
    /// Sort by path-string key.
    #[default]
    Lexicographic,
    /// Keep DFS registration order.
    DeclarationOrder,
}

/// Top-level project configuration loaded from `.jsgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Schema documents to ingest.
    pub inputs: Vec<String>,
    /// Directory the generated modules are written to.
    pub output: String,
    /// Module prefix, e.g. `Data`.
    pub module: String,
    pub emit_sort: EmitSort,
    pub strict: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: "src/generated".to_string(),
            module: String::new(),
            emit_sort: EmitSort::default(),
            strict: false,
        }
    }
}

impl ProjectConfig {
    pub fn generate_config(&self) -> GenerateConfig {
        GenerateConfig {
            root_module: self.module.clone(),
            emit_sort: self.emit_sort,
            strict: self.strict,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".jsgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ProjectConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: ProjectConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# jsgen configuration
inputs: []
  # - schemas/definitions.json
  # - schemas/circle.json
output: src/generated
module: ""            # module prefix, e.g. Data
emit_sort: lexicographic  # lexicographic | declaration_order
strict: false         # escalate warnings to errors
"#
}
