//! Configuration loading and merging.

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid regex pattern '{pattern}': {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Main configuration structure.
///
/// Configuration is optional; with no config file present, only the
/// built-in rule table applies.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Custom user-defined rules, checked before the built-in table.
    pub rules: Vec<CustomRule>,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

/// Custom user-defined rule.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomRule {
    /// Rule name for audit entries.
    pub name: String,
    /// Regex pattern searched anywhere in the command.
    pub pattern: String,
    /// Action: "block" or "allow".
    #[serde(default = "default_action")]
    pub action: String,
    /// Reason (for blocks).
    #[serde(default)]
    pub reason: Option<String>,
}

fn default_action() -> String {
    "block".to_string()
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

/// Compiled configuration with pre-built regexes.
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Compiled custom rules.
    pub custom_patterns: Vec<(CustomRule, Regex)>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Load user config (~/.claude/command-guard.toml)
        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        // Load and merge project config (.command-guard.toml in cwd)
        if let Some(cwd) = cwd {
            if let Some(project_config) = Self::load_project_config(cwd)? {
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// Load user-level config from ~/.claude/command-guard.toml
    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        let path = Self::user_config_path();
        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Ok(Some(toml::from_str(&content)?));
            }
        }
        Ok(None)
    }

    /// Load project-level config from .command-guard.toml
    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(".command-guard.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(toml::from_str(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects COMMAND_GUARD_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("COMMAND_GUARD_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(".claude/command-guard.toml"))
    }

    /// Merge another config into this one (other takes precedence for scalars).
    fn merge(&mut self, other: Config) {
        self.rules.extend(other.rules);

        if other.audit.enabled {
            self.audit.enabled = true;
            if other.audit.path.is_some() {
                self.audit.path = other.audit.path;
            }
        }
    }

    /// Compile all regex patterns for faster matching.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let custom_patterns = self
            .rules
            .iter()
            .map(|rule| {
                let re = Regex::new(&rule.pattern).map_err(|e| ConfigError::Regex {
                    pattern: rule.pattern.clone(),
                    source: e,
                })?;
                Ok((rule.clone(), re))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(CompiledConfig {
            raw: self,
            custom_patterns,
        })
    }
}

impl CompiledConfig {
    /// The compiled default config: built-in rules only, no audit.
    pub fn empty() -> Self {
        Self {
            raw: Config::default(),
            custom_patterns: Vec::new(),
        }
    }
}
