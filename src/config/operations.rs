//! Config loading, validation, and limit resolution.

use super::model::Config;
use crate::error::{MetagenError, Result};
use crate::expand::Limit;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MetagenError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MetagenError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// `limit`, when present, must lie in `1..=255`.
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit
            && Limit::try_from(limit).is_err()
        {
            return Err(MetagenError::ConfigError(format!(
                "limit must be between {} and {} (found {})",
                Limit::MIN,
                Limit::MAX,
                limit
            )));
        }

        Ok(())
    }

    /// Pick the limit for a run: the command line wins over the config.
    pub fn resolve_limit(&self, cli_limit: Option<u8>) -> Result<Option<Limit>> {
        if let Some(value) = cli_limit {
            return Limit::new(value).map(Some).ok_or_else(|| {
                MetagenError::UserError(format!(
                    "limit must be between {} and {} (found {})",
                    Limit::MIN,
                    Limit::MAX,
                    value
                ))
            });
        }

        match self.limit {
            Some(value) => Limit::try_from(value).map(Some).map_err(|value| {
                MetagenError::ConfigError(format!(
                    "limit must be between {} and {} (found {})",
                    Limit::MIN,
                    Limit::MAX,
                    value
                ))
            }),
            None => Ok(None),
        }
    }
}
