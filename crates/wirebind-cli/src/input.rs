//! Loading schemas, configuration, and templates from disk

use anyhow::{Context, Result};
use std::path::Path;
use wirebind_codegen::SlotTemplate;
use wirebind_core::{GeneratorConfig, Schema};

/// Configuration file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "wirebind.toml";

/// Document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

/// Load a schema from a JSON or TOML file
pub fn load_schema(path: &Path) -> Result<Schema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema: {path:?}"))?;

    let schema = match Format::of(path) {
        Format::Toml => Schema::from_toml(&content),
        Format::Json => Schema::from_json(&content),
    }
    .with_context(|| format!("Failed to parse schema: {path:?}"))?;

    tracing::debug!(
        requests = schema.requests.len(),
        responses = schema.responses.len(),
        events = schema.events.len(),
        others = schema.others.len(),
        "loaded schema"
    );
    Ok(schema)
}

/// Load generator configuration.
///
/// Without an explicit path, `wirebind.toml` in the working directory is used
/// when it exists; otherwise defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
        None => return Ok(GeneratorConfig::default()),
    };

    let content = std::fs::read(path).with_context(|| format!("Failed to read config: {path:?}"))?;

    let config = match Format::of(path) {
        Format::Toml => {
            let text = String::from_utf8(content)
                .with_context(|| format!("Config is not valid UTF-8: {path:?}"))?;
            GeneratorConfig::from_toml(&text)
        }
        Format::Json => GeneratorConfig::from_json(&content),
    }
    .with_context(|| format!("Invalid config: {path:?}"))?;

    Ok(config)
}

/// Load a slot template, or the built-in converter template
pub fn load_template(path: Option<&Path>) -> Result<SlotTemplate> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {path:?}"))?;
            Ok(SlotTemplate::new(source))
        }
        None => Ok(SlotTemplate::default_converter()),
    }
}

/// Write generated text, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {parent:?}"))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {path:?}"))
}
