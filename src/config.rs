//! Backend configuration.
//!
//! Configuration is a loose string-to-string mapping, built by whatever
//! bootstrap code the host application has, or loaded from a JSON object of
//! string keys and values. Recognized keys:
//!
//! - `type`: backend selector (`""`, `"std_out"`, `"file"`)
//! - `color`: presence enables ANSI-colored labels (std_out backend only)
//! - `file_name`: output file base name (file backend, required)
//! - `reopen_interval`: whole seconds between reopens (file backend, default 300)

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A loose string-map logger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogConfig(HashMap<String, String>);

impl LogConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A colored standard-output configuration (the process default).
    pub fn std_out() -> Self {
        Self::new().with("type", "std_out").with("color", "")
    }

    /// A file-backend configuration writing to `file_name`.
    pub fn file(file_name: &str) -> Self {
        Self::new().with("type", "file").with("file_name", file_name)
    }

    /// Sets `key` to `value`, consuming and returning the configuration.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// Looks up `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` is present, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Loads a configuration from a JSON file holding one flat object of
    /// string keys and values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LogConfig {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}
