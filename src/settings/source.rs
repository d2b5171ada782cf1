//! Provenance of the documents contributing to a settings tree

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Role a settings document plays in the merge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceOrigin {
    Default,
    Override,
}

/// A contributing settings document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsSource {
    /// Origin of this source
    pub origin: SourceOrigin,

    /// Document path (None for in-memory trees)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw document bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl SettingsSource {
    pub(crate) fn from_document(origin: SourceOrigin, path: &Path, digest: Option<String>) -> Self {
        Self {
            origin,
            path: Some(path.to_string_lossy().to_string()),
            digest,
        }
    }

    pub(crate) fn in_memory(origin: SourceOrigin) -> Self {
        Self {
            origin,
            path: None,
            digest: None,
        }
    }
}
