//! Test fixtures for settings documents
//!
//! Writes default and user settings files into a temporary `.settings`
//! directory that lives as long as the fixture.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A pair of settings documents on disk
pub struct SettingsFixture {
    _dir: TempDir,
    pub default_settings: Value,
    pub user_settings: Value,
    pub default_settings_file: PathBuf,
    pub user_settings_file: PathBuf,
    pub missing_file: PathBuf,
}

impl SettingsFixture {
    /// Write both trees as YAML documents.
    pub fn yaml(name: &str, default_settings: Value, user_settings: Value) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let settings_dir = dir.path().join(".settings");
        fs::create_dir(&settings_dir).expect("Failed to create settings dir");

        let default_settings_file = settings_dir.join(format!("default_{}.yaml", name));
        let user_settings_file = settings_dir.join(format!("user_{}.yaml", name));

        write_yaml(&default_settings, &default_settings_file);
        write_yaml(&user_settings, &user_settings_file);

        Self {
            missing_file: settings_dir.join("some-non-existing-file.yaml"),
            _dir: dir,
            default_settings,
            user_settings,
            default_settings_file,
            user_settings_file,
        }
    }

    /// Nested mappings with a sequence at `d.d`.
    pub fn nested() -> Self {
        Self::yaml(
            "settings1",
            json!({
                "a": 1,
                "c": 1,
                "d": {"a": 1, "c": 1, "d": [1, 2, 3]}
            }),
            json!({
                "b": 2,
                "c": 3,
                "d": {"b": 2, "c": 3, "d": [4, 5, 6]}
            }),
        )
    }

    /// Project metadata with a user override for the author.
    pub fn project() -> Self {
        Self::yaml(
            "settings2",
            json!({
                "author": {
                    "first-name": "New",
                    "family-name": "Sky",
                    "email": "labs@new.sky"
                },
                "company": "NewSkyLabs",
                "version": "0.0.1.dev1",
                "status": "Development",
                "license": "MIT",
                "python-project": {
                    "language": "Python",
                    "template-dir": "/path/to/templates",
                    "project-dir": "."
                }
            }),
            json!({
                "author": {
                    "first-name": "Dietrich",
                    "family-name": "Bollmann",
                    "email": "dietrich@newskylabs.net"
                },
                "version": "1.2.3",
                "status": "Production",
                "cpp-project": {
                    "language": "C++",
                    "template-dir": "/path/to/cpp-templates",
                    "project-dir": "."
                }
            }),
        )
    }

    /// Directory holding the fixture files.
    pub fn dir(&self) -> PathBuf {
        self.default_settings_file
            .parent()
            .map(PathBuf::from)
            .expect("Fixture file has a parent")
    }
}

fn write_yaml(value: &Value, path: &Path) {
    let yaml = serde_yaml::to_string(value).expect("Failed to serialize YAML");
    fs::write(path, yaml).expect("Failed to write settings file");
}
