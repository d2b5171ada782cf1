//! Merged settings with dotted-path access
//!
//! A `Settings` value owns one tree built from a required default document
//! and an optional override document.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use super::error::SettingsError;
use super::loader::{DocumentLoader, FileLoader};
use super::source::{SettingsSource, SourceOrigin};
use crate::merge::merge;
use crate::path;

/// Default settings merged with optional user overrides
#[derive(Debug, Clone)]
pub struct Settings {
    root: Value,
    sources: Vec<SettingsSource>,
    loaded_at: DateTime<Utc>,
}

impl Settings {
    /// Load settings from files on disk.
    ///
    /// The default source is required and must be readable. A missing or
    /// unreadable override source is skipped and the defaults are used as
    /// they are. Parse errors in either document are returned.
    pub fn new(
        default_source: Option<&Path>,
        override_source: Option<&Path>,
    ) -> Result<Self, SettingsError> {
        Self::with_loader(&FileLoader, default_source, override_source)
    }

    /// Load settings through a custom document loader.
    pub fn with_loader<L: DocumentLoader + ?Sized>(
        loader: &L,
        default_source: Option<&Path>,
        override_source: Option<&Path>,
    ) -> Result<Self, SettingsError> {
        let default_path = default_source.ok_or(SettingsError::MissingDefaults)?;
        if !loader.exists(default_path) {
            return Err(SettingsError::NotFound {
                path: default_path.to_path_buf(),
            });
        }

        let mut sources = Vec::new();

        let document = match loader.load(default_path) {
            Ok(document) => document,
            Err(SettingsError::Io { path, source }) => {
                debug!(path = %path.display(), error = %source, "default settings unreadable");
                return Err(SettingsError::NotFound { path });
            }
            Err(e) => return Err(e),
        };
        let mut root = into_root(document.root, default_path)?;
        sources.push(SettingsSource::from_document(
            SourceOrigin::Default,
            default_path,
            document.digest,
        ));

        match override_source {
            Some(override_path) if loader.exists(override_path) => {
                match loader.load(override_path) {
                    Ok(document) => {
                        let overwrite = into_root(document.root, override_path)?;
                        root = merge(root, overwrite);
                        sources.push(SettingsSource::from_document(
                            SourceOrigin::Override,
                            override_path,
                            document.digest,
                        ));
                    }
                    // Unreadable overrides are skipped; parse errors still propagate
                    Err(SettingsError::Io { path, source }) => {
                        debug!(
                            path = %path.display(),
                            error = %source,
                            "override settings unreadable, using defaults"
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
            Some(override_path) => {
                debug!(path = %override_path.display(), "override settings not found, using defaults");
            }
            None => {
                debug!("no override settings given, using defaults");
            }
        }

        Ok(Self {
            root,
            sources,
            loaded_at: Utc::now(),
        })
    }

    /// Build settings from already parsed trees.
    pub fn from_nodes(defaults: Value, overwrite: Option<Value>) -> Result<Self, SettingsError> {
        let in_memory = Path::new("<memory>");

        let mut root = into_root(defaults, in_memory)?;
        let mut sources = vec![SettingsSource::in_memory(SourceOrigin::Default)];

        if let Some(overwrite) = overwrite {
            root = merge(root, into_root(overwrite, in_memory)?);
            sources.push(SettingsSource::in_memory(SourceOrigin::Override));
        }

        Ok(Self {
            root,
            sources,
            loaded_at: Utc::now(),
        })
    }

    /// The whole merged tree.
    pub fn all(&self) -> &Value {
        &self.root
    }

    /// Take ownership of the merged tree.
    pub fn into_inner(self) -> Value {
        self.root
    }

    /// Get a setting by dotted path (`None` if absent).
    pub fn get(&self, path: &str) -> Option<&Value> {
        path::get(&self.root, path)
    }

    /// Set a setting by dotted path, creating intermediate mappings.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        path::set(&mut self.root, path, value.into());
    }

    /// Get a setting as string
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|v| v.as_str())
    }

    /// Get a setting as u64
    pub fn get_u64(&self, path: &str) -> Option<u64> {
        self.get(path).and_then(|v| v.as_u64())
    }

    /// Get a setting as i64
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(|v| v.as_i64())
    }

    /// Get a setting as f64
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(|v| v.as_f64())
    }

    /// Get a setting as bool
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(|v| v.as_bool())
    }

    /// Deserialize a setting into `T`.
    ///
    /// Absent paths give `Ok(None)`; present values of the wrong shape are
    /// an error.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, SettingsError> {
        self.get(path)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|e| SettingsError::Deserialize {
                    path: path.to_string(),
                    source: e,
                })
            })
            .transpose()
    }

    /// Documents that contributed to the tree, defaults first.
    pub fn sources(&self) -> &[SettingsSource] {
        &self.sources
    }

    /// When the settings were built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Serialize the merged tree to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.root)
    }
}

/// Normalize a parsed document into a settings root.
fn into_root(value: Value, path: &Path) -> Result<Value, SettingsError> {
    match value {
        Value::Object(_) => Ok(value),
        Value::Null => Ok(Value::Object(Map::new())),
        _ => Err(SettingsError::RootNotMapping {
            path: path.to_path_buf(),
        }),
    }
}
