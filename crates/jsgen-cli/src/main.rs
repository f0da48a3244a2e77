use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use jsgen_core::config::{self, EmitSort, GenerateConfig, ProjectConfig, CONFIG_FILE_NAME};
use jsgen_core::error::Diagnostic;
use jsgen_core::parse;
use jsgen_elm::ElmEmitter;

#[derive(Parser)]
#[command(name = "jsgen", about = "JSON Schema code generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate typed modules from JSON Schema documents
    Generate {
        /// Paths to the schema documents
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Module prefix applied to every emitted module
        #[arg(long)]
        module: Option<String>,

        /// Order the emitted declarations
        #[arg(long)]
        emit_sort: Option<EmitSortArg>,

        /// Escalate warnings to errors
        #[arg(long)]
        strict: bool,
    },

    /// Parse schema documents and report diagnostics without emitting
    Validate {
        /// Paths to the schema documents
        inputs: Vec<PathBuf>,
    },

    /// Inspect the parsed IR of a schema document
    Inspect {
        /// Path to the schema document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new jsgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EmitSortArg {
    Lexicographic,
    DeclarationOrder,
}

impl From<EmitSortArg> for EmitSort {
    fn from(arg: EmitSortArg) -> Self {
        match arg {
            EmitSortArg::Lexicographic => EmitSort::Lexicographic,
            EmitSortArg::DeclarationOrder => EmitSort::DeclarationOrder,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            inputs,
            out,
            module,
            emit_sort,
            strict,
        } => cmd_generate(inputs, out, module, emit_sort, strict),

        Commands::Validate { inputs } => cmd_validate(inputs),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "jsgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<ProjectConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Read schema documents into `(source URI, parsed JSON)` pairs.
fn load_documents(paths: &[PathBuf]) -> Result<Vec<(String, serde_json::Value)>> {
    let mut documents = Vec::new();
    for path in paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        let uri = document_uri(path)?;
        documents.push((uri, value));
    }
    Ok(documents)
}

/// Source URI for a document: its canonical `file://` URL. A schema's own
/// absolute `id` takes precedence during parsing.
fn document_uri(path: &Path) -> Result<String> {
    let absolute = fs::canonicalize(path)
        .with_context(|| format!("failed to canonicalize {}", path.display()))?;
    url::Url::from_file_path(&absolute)
        .map(|url| url.to_string())
        .map_err(|_| anyhow::anyhow!("cannot build a file URI for {}", absolute.display()))
}

fn print_diagnostics(warnings: &[Diagnostic], errors: &[Diagnostic]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
    for error in errors {
        eprintln!("error: {error}");
    }
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &indexmap::IndexMap<String, String>) -> Result<()> {
    for (file, content) in files {
        let path = base.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Generate the "do not edit" README.
fn readme_content() -> &'static str {
    r#"# Generated Code — Do Not Edit

This directory is **auto-generated** by jsgen. Any manual changes will be
overwritten the next time `jsgen generate` is run.

To customize the generated output, edit your `.jsgen.yaml` configuration file.
"#
}

fn cmd_generate(
    inputs: Vec<PathBuf>,
    out: Option<PathBuf>,
    module: Option<String>,
    emit_sort: Option<EmitSortArg>,
    strict: bool,
) -> Result<()> {
    let project = try_load_config()?.unwrap_or_default();

    let inputs = if inputs.is_empty() {
        project.inputs.iter().map(PathBuf::from).collect()
    } else {
        inputs
    };
    if inputs.is_empty() {
        anyhow::bail!("no input schemas; pass paths or list them in {CONFIG_FILE_NAME}");
    }

    let config = GenerateConfig {
        root_module: module.unwrap_or_else(|| project.module.clone()),
        emit_sort: emit_sort.map(EmitSort::from).unwrap_or(project.emit_sort),
        strict: strict || project.strict,
    };
    let output_dir = out.unwrap_or_else(|| PathBuf::from(&project.output));

    let documents = load_documents(&inputs)?;
    let result = jsgen_core::generate(&documents, &ElmEmitter, &config)?;

    print_diagnostics(&result.warnings, &result.errors);

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    write_files(&output_dir, &result.files)?;

    let readme_path = output_dir.join("README.md");
    fs::write(&readme_path, readme_content())
        .with_context(|| format!("failed to write {}", readme_path.display()))?;

    eprintln!(
        "Generated {} files in {}",
        result.files.len() + 1, // +1 for README
        output_dir.display()
    );

    if !result.is_success() {
        anyhow::bail!("generation finished with {} errors", result.errors.len());
    }
    Ok(())
}

fn cmd_validate(inputs: Vec<PathBuf>) -> Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("no input schemas to validate");
    }

    let documents = load_documents(&inputs)?;
    let parsed = parse::parse_schemas(&documents);

    for schema in parsed.schemas.iter() {
        eprintln!("{} ({} types)", schema.id, schema.types.len());
    }
    print_diagnostics(&parsed.warnings, &parsed.errors);

    if !parsed.errors.is_empty() {
        anyhow::bail!("validation finished with {} errors", parsed.errors.len());
    }
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let documents = load_documents(&[input])?;
    let parsed = parse::parse_schemas(&documents);

    let summary = build_inspect_summary(&parsed);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(parsed: &parse::ParsedSchemas) -> serde_json::Value {
    let schemas: Vec<serde_json::Value> = parsed
        .schemas
        .iter()
        .map(|schema| {
            let types: Vec<serde_json::Value> = schema
                .types
                .iter()
                .map(|(key, node)| {
                    serde_json::json!({
                        "key": key,
                        "name": node.name(),
                        "kind": node.kind_name(),
                    })
                })
                .collect();
            serde_json::json!({
                "id": schema.id.to_string(),
                "title": schema.title,
                "types": types,
            })
        })
        .collect();

    serde_json::json!({
        "schemas": schemas,
        "warnings": parsed.warnings.len(),
        "errors": parsed.errors.len(),
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
