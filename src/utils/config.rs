//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset input/output
    pub data: DataSettings,
    /// Lexicon word lists
    pub lexicon: LexiconSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Dataset paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Input CSV with a `text` column
    pub input: PathBuf,
    /// Scored output CSV
    pub output: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Artificial_intelligence_data.csv"),
            output: PathBuf::from("sentiment_analysis_results.csv"),
        }
    }
}

/// Lexicon settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconSettings {
    /// Positive word list, one word per line
    pub positive: PathBuf,
    /// Negative word list, one word per line
    pub negative: PathBuf,
    /// Lowercase entries on load. Off by default: entries are matched as
    /// stored, so uppercase entries never match.
    pub lowercase: bool,
}

impl Default for LexiconSettings {
    fn default() -> Self {
        Self {
            positive: PathBuf::from("positive-words.txt"),
            negative: PathBuf::from("negative-words.txt"),
            lowercase: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from a `.toml` or `.json` file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::FileError(e.to_string()))?;

    match extension(path.as_ref()) {
        "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        ext => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

/// Save configuration to a `.toml` or `.json` file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigError> {
    let content = match extension(path.as_ref()) {
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        ext => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
    };

    std::fs::write(path, content).map_err(|e| ConfigError::FileError(e.to_string()))
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Serialization error
    #[error("Serialize error: {0}")]
    SerializeError(String),
    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.lexicon.positive, PathBuf::from("positive-words.txt"));
        assert!(!config.lexicon.lowercase);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[data]\ninput = \"tweets.csv\"\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.data.input, PathBuf::from("tweets.csv"));
        assert_eq!(config.data.output, PathBuf::from("sentiment_analysis_results.csv"));
        assert_eq!(config.lexicon, LexiconSettings::default());
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.lexicon.lowercase = true;
        save_config(&config, &path).unwrap();

        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_example_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("sentiment.example.toml");
        assert_eq!(load_config(path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::UnsupportedFormat(_))));
    }
}
