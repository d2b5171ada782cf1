//! Dotted Settings - layered settings with dotted-path access
//!
//! This crate merges a default settings tree with optional user overrides
//! and reads or writes nested values through dotted key chains such as
//! `server.listen.0.port`.

pub mod merge;
pub mod path;
pub mod settings;

pub use merge::{merge, merge_into, merged};
pub use settings::{
    Document, DocumentLoader, FileLoader, Format, Settings, SettingsError, SettingsSource,
    SourceOrigin,
};

/// A node in a settings tree: mapping, sequence or scalar.
pub type Node = serde_json::Value;
