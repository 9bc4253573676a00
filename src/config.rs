use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hex view layout settings
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Hex view layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Number of bytes shown on each row of the dump
    #[serde(default = "default_bytes_per_line")]
    pub bytes_per_line: usize,

    /// Number of dump rows on screen
    #[serde(default = "default_visible_lines")]
    pub visible_lines: usize,

    /// Bytes per visual group; an extra space follows each group
    #[serde(default = "default_group_size")]
    pub group_size: usize,
}

fn default_bytes_per_line() -> usize {
    16
}

fn default_visible_lines() -> usize {
    20
}

fn default_group_size() -> usize {
    4
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            bytes_per_line: default_bytes_per_line(),
            visible_lines: default_visible_lines(),
            group_size: default_group_size(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_config_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|d| d.join("bewitched").join("config.json"))
    }

    /// Load configuration from the default location, falling back to defaults if not found
    pub fn load_or_default() -> Self {
        if let Some(config_path) = Self::default_config_path() {
            if config_path.exists() {
                match Self::load_from_file(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(
                            "Failed to load config from {}: {}, using defaults",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }
        Self::default()
    }

    /// Load and validate configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json(&contents)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_json::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let editor = &self.editor;
        if editor.bytes_per_line == 0 {
            return Err(ConfigError::ValidationError(
                "bytes_per_line must be > 0".to_string(),
            ));
        }
        if editor.visible_lines == 0 {
            return Err(ConfigError::ValidationError(
                "visible_lines must be > 0".to_string(),
            ));
        }
        if editor.group_size == 0 || editor.group_size > editor.bytes_per_line {
            return Err(ConfigError::ValidationError(
                "group_size must be between 1 and bytes_per_line".to_string(),
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
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
