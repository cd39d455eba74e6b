//! Config loading, validation, and limit checks.

use super::model::Config;
use crate::error::{MindiffError, Result};
use log::debug;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(MindiffError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MindiffError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("loaded config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Load config from `path` when given, otherwise fall back to defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MindiffError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| MindiffError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - prefixes must not contain line terminators
    /// - `max_lines`, when set, must be positive
    pub fn validate(&self) -> Result<()> {
        for (marker, prefix) in self.prefixes.iter() {
            if prefix.contains(['\n', '\r']) {
                return Err(MindiffError::Config(format!(
                    "prefixes.{} must not contain line terminators",
                    marker
                )));
            }
        }

        if self.max_lines == Some(0) {
            return Err(MindiffError::Config(
                "max_lines must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Reject an input holding more lines than `max_lines` allows.
    pub fn check_line_limit(&self, source_name: &str, lines: usize) -> Result<()> {
        match self.max_lines {
            Some(limit) if lines > limit => Err(MindiffError::InputTooLarge {
                source_name: source_name.to_string(),
                lines,
                limit,
            }),
            _ => Ok(()),
        }
    }
}
