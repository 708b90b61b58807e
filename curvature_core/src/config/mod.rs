//! Project configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ProjectError, Result};

/// Settings applied to new projects and their persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Display name given to a fresh project.
    pub project_name: String,

    /// Base name probed when generating names for new input axes.
    pub new_input_name: String,

    /// Write the project document with indentation.
    pub pretty: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: "New Project".to_string(),
            new_input_name: "New input".to_string(),
            pretty: true,
        }
    }
}

impl ProjectConfig {
    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ProjectError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
