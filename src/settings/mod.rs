//! Settings management
//!
//! Loads a default settings document and an optional user override,
//! deep-merges them and exposes dotted-path access:
//! 1. Default settings (required)
//! 2. User settings (optional, skipped when missing)

mod error;
mod loader;
mod source;
mod store;

pub use error::SettingsError;
pub use loader::{Document, DocumentLoader, FileLoader, Format};
pub use source::{SettingsSource, SourceOrigin};
pub use store::Settings;
