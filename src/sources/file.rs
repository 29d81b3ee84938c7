//! Config file layer

use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LoadError, Result};
use crate::namespace::{Layer, Source};

/// Supported file formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Yaml,
}

impl FileFormat {
    /// JSON unless the extension says otherwise; a file without an extension
    /// is read as JSON too.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "" | "json" => Ok(FileFormat::Json),
            "toml" => Ok(FileFormat::Toml),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            other => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FileFormat::Json => "JSON",
            FileFormat::Toml => "TOML",
            FileFormat::Yaml => "YAML",
        }
    }
}

/// Read the file at `path` into a layer.
///
/// A missing file yields an empty layer and a warning. Anything else that
/// goes wrong (unreadable, malformed, top level not a mapping) is an error.
pub fn file_layer(path: &Path) -> Result<Layer> {
    let format = FileFormat::from_path(path)?;

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Config file {} not found, continuing without it", path.display());
            return Ok(Layer::new(Source::File, Map::new()));
        }
        Err(source) => return Err(LoadError::Read { path: path.to_path_buf(), source }),
    };

    let tree = parse(content.trim_start_matches('\u{feff}'), format, path)?;
    tracing::debug!("Loaded {} top-level keys from {}", tree.len(), path.display());
    Ok(Layer::new(Source::File, tree))
}

fn parse(content: &str, format: FileFormat, path: &Path) -> Result<Map<String, Value>> {
    let parse_error = |message: String| LoadError::Parse {
        path: path.to_path_buf(),
        format: format.name(),
        message,
    };

    let value: Value = match format {
        FileFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        FileFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        // An empty YAML document is null; treat it as an empty mapping.
        FileFormat::Yaml if content.trim().is_empty() => Value::Object(Map::new()),
        FileFormat::Yaml => match serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))? {
            Value::Null => Value::Object(Map::new()),
            other => other,
        },
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(parse_error(format!("expected a mapping at the top level, found {}", kind(&other)))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
