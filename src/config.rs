//! Theme bootstrap configuration
//!
//! Defaults mirror the conventional theme layout: controllers under
//! `controllers/`, shared components under `_components/`, and two
//! stylesheet imports under `styles/`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory (relative to the theme root) scanned for controllers.
    #[serde(default = "default_controllers_dir")]
    pub controllers_dir: String,

    /// Path prefix discovered controller entries are rooted at. The
    /// registrar strips this prefix when deriving identifiers.
    #[serde(default = "default_root_prefix")]
    pub root_prefix: String,

    /// File extensions loaded as controller modules.
    #[serde(default = "default_controller_extensions")]
    pub controller_extensions: Vec<String>,

    /// Directory (relative to the theme root) scanned for components.
    #[serde(default = "default_components_dir")]
    pub components_dir: String,

    /// File extensions bundled as component assets.
    #[serde(default = "default_component_extensions")]
    pub component_extensions: Vec<String>,

    /// Stylesheets imported by the theme, relative to the theme root.
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
}

fn default_controllers_dir() -> String {
    "controllers".to_string()
}

fn default_root_prefix() -> String {
    "./controllers/".to_string()
}

fn default_controller_extensions() -> Vec<String> {
    vec!["js".to_string(), "js.rb".to_string()]
}

fn default_components_dir() -> String {
    "_components".to_string()
}

fn default_component_extensions() -> Vec<String> {
    vec![
        "js".to_string(),
        "jsx".to_string(),
        "js.rb".to_string(),
        "css".to_string(),
    ]
}

fn default_stylesheets() -> Vec<String> {
    vec![
        "styles/index.css".to_string(),
        "styles/syntax-highlighting.css".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            controllers_dir: default_controllers_dir(),
            root_prefix: default_root_prefix(),
            controller_extensions: default_controller_extensions(),
            components_dir: default_components_dir(),
            component_extensions: default_component_extensions(),
            stylesheets: default_stylesheets(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.controllers_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "controllers_dir cannot be empty".to_string(),
            ));
        }

        if self.root_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "root_prefix cannot be empty".to_string(),
            ));
        }

        if !self.root_prefix.ends_with('/') {
            return Err(ConfigError::ValidationError(
                "root_prefix must end with '/'".to_string(),
            ));
        }

        if self.controller_extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "controller_extensions cannot be empty".to_string(),
            ));
        }

        if self.components_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "components_dir cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
