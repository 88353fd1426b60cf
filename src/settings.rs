//! Run settings, layered the confique way.
//!
//! ```text
//! Compiled defaults      #[config(default = ...)]
//!        ↑ overridden by
//! .tfvars-merge.toml     optional, in the working directory
//!        ↑ overridden by
//! Overrides              command-line flags that were actually given
//! ```
//!
//! Environment variables are never consulted.

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TfvarsError;

/// Name of the optional settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = ".tfvars-merge.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// File name of the merged output, written into the working directory.
    #[config(default = "00-all.auto.tfvars.json")]
    pub output: String,

    /// Pretty-print the merged JSON instead of writing it on one line.
    #[config(default = false)]
    pub pretty: bool,
}

/// Highest-priority settings layer, built from explicit values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    entries: Vec<(String, Value)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override. `None` values are ignored (useful for optional clap args).
    /// If the same key is set twice, the later value wins.
    pub fn set<V: Into<Value>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.entries.push((key.to_string(), v.into()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn to_layer(&self) -> Result<<Settings as Config>::Layer, TfvarsError> {
        let map: Map<String, Value> = self.entries.iter().cloned().collect();
        serde_json::from_value(Value::Object(map)).map_err(|e| TfvarsError::InvalidOverride {
            reason: e.to_string(),
        })
    }
}

/// Resolve settings for a run in `dir`.
pub fn load_settings(dir: &Path, overrides: &Overrides) -> Result<Settings, TfvarsError> {
    let layer = overrides.to_layer()?;
    let settings = Settings::builder()
        .preloaded(layer)
        .file(dir.join(SETTINGS_FILE))
        .load()?;
    Ok(settings)
}
