//! Settings document loading
//!
//! Documents are parsed into generic `serde_json::Value` trees. The format is
//! chosen from the file extension; YAML is the fallback.

use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::error::SettingsError;

/// Serialization format of a settings document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Format::Json,
            Some("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }

    /// Parse raw bytes in this format.
    pub fn parse(self, path: &Path, bytes: &[u8]) -> Result<Value, SettingsError> {
        match self {
            Format::Json => serde_json::from_slice(bytes).map_err(|e| SettingsError::parse(path, e)),
            Format::Toml => {
                let contents = std::str::from_utf8(bytes)
                    .map_err(|e| SettingsError::parse(path, format!("Invalid UTF-8: {}", e)))?;
                let toml_value: toml::Value =
                    toml::from_str(contents).map_err(|e| SettingsError::parse(path, e))?;
                Ok(toml_to_json(toml_value))
            }
            Format::Yaml => {
                // An empty YAML document is null
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Value::Null);
                }
                serde_yaml::from_slice(bytes).map_err(|e| SettingsError::parse(path, e))
            }
        }
    }
}

/// A parsed settings document
#[derive(Debug, Clone)]
pub struct Document {
    /// The parsed tree
    pub root: Value,

    /// SHA-256 digest of the raw bytes, when the loader has them
    pub digest: Option<String>,
}

/// Source of settings documents.
///
/// Implementations resolve a source identifier and parse it into a tree.
pub trait DocumentLoader {
    /// Whether the source resolves to a readable document.
    fn exists(&self, source: &Path) -> bool;

    /// Load and parse the document.
    fn load(&self, source: &Path) -> Result<Document, SettingsError>;
}

/// Loads settings documents from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl DocumentLoader for FileLoader {
    fn exists(&self, source: &Path) -> bool {
        source.is_file() && fs::File::open(source).is_ok()
    }

    fn load(&self, source: &Path) -> Result<Document, SettingsError> {
        let bytes = fs::read(source).map_err(|e| SettingsError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let format = Format::from_path(source);
        let root = format.parse(source, &bytes)?;
        debug!(path = %source.display(), ?format, %digest, "loaded settings document");

        Ok(Document {
            root,
            digest: Some(digest),
        })
    }
}

/// Convert TOML Value to JSON Value
fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
