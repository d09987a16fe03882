//! Config loading, validation, and discovery.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{PromptFormError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Relative template paths are resolved against the directory holding
    /// the config file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptFormError::ConfigError)` - Read, parse or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptFormError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            PromptFormError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptFormError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `submit_label` must not be blank
    /// - `form_template` and `field_template`, when set, must not be empty paths
    pub fn validate(&self) -> Result<()> {
        if self.submit_label.trim().is_empty() {
            return Err(PromptFormError::ConfigError(
                "config validation failed: submit_label must not be empty".to_string(),
            ));
        }

        for (key, path) in [
            ("form_template", &self.form_template),
            ("field_template", &self.field_template),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(PromptFormError::ConfigError(format!(
                    "config validation failed: {} must not be an empty path",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Find the config to use.
    ///
    /// An explicit path must exist. Otherwise `promptform.yaml` in `dir` is
    /// loaded when present, and defaults apply when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            debug!(dir = %dir.display(), "no config file found, using defaults");
            Ok(Self::default())
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.form_template, &mut self.field_template]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
