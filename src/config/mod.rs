pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::llm::ProviderKind;

use error::Result;

/// Optional file-based defaults for the generator. Every field can be
/// overridden by a CLI flag; a missing agentforge.toml just means no
/// defaults.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Default provider: gemini, openai or anthropic
    pub provider: Option<String>,

    /// Default model name (must be in the provider's supported list)
    pub model: Option<String>,

    /// Default sampling temperature in [0, 1]
    pub temperature: Option<f32>,

    /// API key; supports ${VAR} environment expansion
    pub api_key: Option<String>,

    /// Directory the downloadable artifacts are written to
    pub out_dir: Option<String>,
}

impl Config {
    /// Load configuration from agentforge.toml, searching upward from
    /// `target_path`
    pub fn load(target_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = find_config_file(target_path.as_ref())?;

        let config_data = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadFailed(format!("{}: {}", config_path.display(), e)))?;

        let mut config: Config = toml::from_str(&config_data)?;

        // Warn about hardcoded API keys
        if let Some(api_key) = &config.api_key {
            if !api_key.contains("${") && api_key.starts_with("sk-") {
                warn!("API key appears to be hardcoded in agentforge.toml. Consider using environment variables: api_key = \"${{OPENAI_API_KEY}}\"");
            }
        }

        config.expand_env_vars();
        config.validate()?;

        Ok(config)
    }

    /// Like `load`, but a missing config file yields the empty defaults
    pub fn load_or_default(target_path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(target_path) {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            Err(e) => Err(e),
        }
    }

    /// Check field values that have a closed domain
    fn validate(&self) -> Result<()> {
        if let Some(provider) = &self.provider {
            ProviderKind::from_str(provider).map_err(ConfigError::Invalid)?;
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=1.0).contains(&temperature) {
                return Err(ConfigError::Invalid(format!(
                    "'temperature' must be within [0, 1], got {}",
                    temperature
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variables in configuration values
    fn expand_env_vars(&mut self) {
        if let Some(api_key) = &self.api_key {
            if let Some(expanded) = expand_env_var(api_key) {
                self.api_key = Some(expanded);
            }
        }
    }

    /// Resolve the credential for a provider: config value first, then the
    /// provider's environment variable
    pub fn get_api_key(&self, provider: ProviderKind) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env::var(provider.api_key_env()).ok())
    }
}

/// Find agentforge.toml by searching upward from the given path
fn find_config_file(start_path: &Path) -> Result<PathBuf> {
    let current_dir = if start_path.is_file() {
        start_path
            .parent()
            .ok_or_else(|| ConfigError::Invalid("Invalid file path".to_string()))?
    } else {
        start_path
    };

    let mut current_dir = current_dir
        .canonicalize()
        .map_err(|e| ConfigError::ReadFailed(format!("{}: {}", current_dir.display(), e)))?;

    loop {
        let config_path = current_dir.join("agentforge.toml");
        if config_path.exists() {
            return Ok(config_path);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break, // Reached root
        }
    }

    Err(ConfigError::NotFound(start_path.display().to_string()))
}

/// Expand environment variable in the format ${VAR_NAME}
fn expand_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        env::var(var_name).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_expand_env_var() {
        env::set_var("FORGE_TEST_VAR", "test_value");

        assert_eq!(
            expand_env_var("${FORGE_TEST_VAR}"),
            Some("test_value".to_string())
        );
        assert_eq!(expand_env_var("${NONEXISTENT}"), None);
        assert_eq!(expand_env_var("not_a_var"), None);

        env::remove_var("FORGE_TEST_VAR");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            provider: Some("gemini".to_string()),
            temperature: Some(0.5),
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        config.temperature = Some(1.5);
        assert!(config.validate().is_err());

        config.temperature = Some(0.5);
        config.provider = Some("mistral".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_find_config_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("agentforge.toml");
        fs::write(&config_path, "provider = \"gemini\"")?;

        // Should find config in same directory
        let found = find_config_file(temp_dir.path())?;
        assert_eq!(found.canonicalize()?, config_path.canonicalize()?);

        // Should find config from subdirectory
        let sub_dir = temp_dir.path().join("subdir");
        fs::create_dir(&sub_dir)?;
        let found = find_config_file(&sub_dir)?;
        assert_eq!(found.canonicalize()?, config_path.canonicalize()?);

        Ok(())
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_or_default(temp_dir.path())?;
        assert!(config.provider.is_none());
        assert!(config.api_key.is_none());
        Ok(())
    }

    #[test]
    fn test_api_key_env_fallback() {
        env::set_var("GEMINI_API_KEY", "from-env");
        let config = Config::default();
        assert_eq!(
            config.get_api_key(ProviderKind::Gemini),
            Some("from-env".to_string())
        );
        env::remove_var("GEMINI_API_KEY");
    }
}
