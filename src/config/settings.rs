//! Configuration settings for Svar.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub agent: AgentSettings,
    pub wikipedia: WikipediaSettings,
    pub search: SearchSettings,
    pub transcript: TranscriptSettings,
    pub execution: ExecutionSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for storing application data.
    pub data_dir: String,
    /// Directory holding question attachments (<id>.py, <id>.xlsx).
    pub attachments_dir: String,
    /// Log level used when no -v flag is given (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.svar".to_string(),
            attachments_dir: ".".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

/// Agent loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// LLM model driving the agent.
    pub model: String,
    /// Maximum LLM calls per question before giving up.
    pub max_iterations: usize,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_iterations: 15,
        }
    }
}

/// Wikipedia lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikipediaSettings {
    /// Wikipedia language edition to query.
    pub language: String,
}

impl Default for WikipediaSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
        }
    }
}

/// Web search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of results to include.
    pub max_results: usize,
    /// HTTP timeout for search requests, in seconds.
    pub timeout_seconds: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 10,
            timeout_seconds: 30,
        }
    }
}

/// YouTube transcript settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Preferred caption language.
    pub language: String,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
        }
    }
}

/// Python execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionSettings {
    /// Python interpreter to invoke.
    pub python_bin: String,
    /// Wall-clock timeout for script execution, in seconds.
    pub timeout_seconds: u64,
}

impl Default for ExecutionSettings {
    fn default() -> Self {
        Self {
            python_bin: "python3".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SvarError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("svar")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data directory path.
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.data_dir)
    }

    /// Get the expanded attachments directory path.
    pub fn attachments_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.attachments_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.execution.timeout_seconds, 30);
        assert_eq!(settings.execution.python_bin, "python3");
        assert_eq!(settings.wikipedia.language, "en");
        assert_eq!(settings.agent.max_iterations, 15);
        assert_eq!(settings.general.log_level, "warn");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [agent]
            model = "gpt-4o"
        "#,
        )
        .unwrap();

        assert_eq!(settings.agent.model, "gpt-4o");
        assert_eq!(settings.agent.max_iterations, 15);
        assert_eq!(settings.execution.timeout_seconds, 30);
    }

    #[test]
    fn test_roundtrip() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.general.data_dir, settings.general.data_dir);
    }
}
