use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config file at {config_path}: syntax.{field} must not be blank")]
    BlankSyntaxValue {
        config_path: PathBuf,
        field: &'static str,
    },
}

/// Deck grammar overrides. Missing keys fall back to the landslide defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxConfig {
    pub delimiter: String,
    pub directive_prefix: String,
    pub notes_heading: String,
    /// Empty string disables the notes directive.
    pub notes_directive: String,
}

impl SyntaxConfig {
    /// Name of the first required value that is blank.
    ///
    /// A blank delimiter would split on every blank line and a blank prefix
    /// would read any `word: text` line as a directive.
    pub fn blank_field(&self) -> Option<&'static str> {
        [
            ("delimiter", &self.delimiter),
            ("directive_prefix", &self.directive_prefix),
            ("notes_heading", &self.notes_heading),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            delimiter: "---".to_string(),
            directive_prefix: ".".to_string(),
            notes_heading: "Presenter Notes".to_string(),
            notes_directive: "notes".to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Deck opened when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_path: Option<PathBuf>,
    #[serde(default)]
    pub syntax: SyntaxConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if let Some(field) = config.syntax.blank_field() {
            return Err(ConfigError::BlankSyntaxValue {
                config_path: config_path.to_path_buf(),
                field,
            });
        }

        // Expand shell variables and tilde in the deck path
        config.deck_path = config
            .deck_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/slidedeck");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
