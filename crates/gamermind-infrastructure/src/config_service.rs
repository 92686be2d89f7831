//! Configuration file service.
//!
//! Loads `config.toml` from the profile directory, materializing it with
//! defaults on first run. There is no schema version and no migration path;
//! unknown values fall back to defaults through serde.

use crate::paths::GamerMindPaths;
use crate::storage::AtomicTomlFile;
use gamermind_core::config::GamerMindConfig;
use gamermind_core::error::{GamerMindError, Result};

/// Service owning the configuration file of a profile.
pub struct ConfigService {
    file: AtomicTomlFile<GamerMindConfig>,
}

impl ConfigService {
    /// Creates a service over the config file of the given path set.
    pub fn new(paths: &GamerMindPaths) -> Self {
        Self {
            file: AtomicTomlFile::new(paths.config_file()),
        }
    }

    /// Loads the configuration, writing the defaults on first run.
    ///
    /// # Returns
    ///
    /// - `Ok(GamerMindConfig)`: Validated configuration
    /// - `Err(GamerMindError::Config)`: Stored values are out of range
    /// - `Err(_)`: The file could not be read or parsed
    pub fn load_or_create(&self) -> Result<GamerMindConfig> {
        let config = match self
            .file
            .load()
            .map_err(|e| GamerMindError::config(e.to_string()))?
        {
            Some(config) => config,
            None => {
                let defaults = GamerMindConfig::default();
                self.file
                    .save(&defaults)
                    .map_err(|e| GamerMindError::config(e.to_string()))?;
                tracing::info!(
                    target: "gamermind::config",
                    path = %self.file.path().display(),
                    "Created configuration file with defaults"
                );
                defaults
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Persists the given configuration.
    pub fn save(&self, config: &GamerMindConfig) -> Result<()> {
        config.validate()?;
        self.file
            .save(config)
            .map_err(|e| GamerMindError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_first_load_materializes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GamerMindPaths::with_root(temp_dir.path());
        let service = ConfigService::new(&paths);

        let config = service.load_or_create().unwrap();

        assert_eq!(config, GamerMindConfig::default());
        assert!(paths.config_file().is_file());
    }

    #[test]
    fn test_saved_values_survive_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GamerMindPaths::with_root(temp_dir.path());
        let service = ConfigService::new(&paths);

        let mut config = service.load_or_create().unwrap();
        config.auth_latency_ms = 10;
        config.notice_period_secs = 5;
        service.save(&config).unwrap();

        let reloaded = service.load_or_create().unwrap();
        assert_eq!(reloaded.auth_latency_ms, 10);
        assert_eq!(reloaded.notice_period_secs, 5);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GamerMindPaths::with_root(temp_dir.path());
        fs::create_dir_all(paths.root()).unwrap();
        fs::write(paths.config_file(), "bot_reply_probability = 7.5\n").unwrap();

        let service = ConfigService::new(&paths);
        let err = service.load_or_create().unwrap_err();
        assert!(matches!(err, GamerMindError::Config(_)));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GamerMindPaths::with_root(temp_dir.path());
        fs::create_dir_all(paths.root()).unwrap();
        fs::write(paths.config_file(), "bot_period_secs = 1\n").unwrap();

        let service = ConfigService::new(&paths);
        let config = service.load_or_create().unwrap();
        assert_eq!(config.bot_period_secs, 1);
        assert_eq!(config.auth_latency_ms, 1000);
    }
}
