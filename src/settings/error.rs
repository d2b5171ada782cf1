//! Settings errors

use std::path::PathBuf;

/// Errors raised while building or reading settings.
///
/// A path that cannot be resolved by `get` is not an error; lookups return
/// `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No default settings source was supplied.
    #[error("a default settings source has to be given")]
    MissingDefaults,

    /// The default settings source does not exist.
    #[error("settings source not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The source exists but could not be read.
    #[error("failed to read settings source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source could not be parsed.
    #[error("failed to parse settings source {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The parsed document root is not a mapping.
    #[error("settings root must be a mapping: {}", path.display())]
    RootNotMapping { path: PathBuf },

    /// A value could not be converted into the requested type.
    #[error("setting {path} has an unexpected shape: {source}")]
    Deserialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SettingsError {
    pub(crate) fn parse(path: &std::path::Path, message: impl std::fmt::Display) -> Self {
        SettingsError::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}
