//! # cfp-config
//!
//! Layered configuration loading for the portal CLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CFP_*` prefix, `__` as separator)
//! 2. Project-level `.cfp/config.toml`
//! 3. User-level `~/.config/cfp/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CFP_API__BASE_URL` -> `api.base_url`,
//! `CFP_GENERAL__POLL_INTERVAL_SECS` -> `general.poll_interval_secs`, etc.
//! The `__` (double underscore) separates nested config sections.

mod api;
mod error;
mod general;
mod sitemap;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use sitemap::SitemapConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl PortalConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails, or
    /// `ConfigError::InvalidValue` if a merged value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".cfp/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("CFP_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cfp").join("config.toml"))
    }

    /// Reject values no layer should be allowed to set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.general.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.poll_interval_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PortalConfig::default();
        assert!(config.api.is_configured());
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.general.poll_interval_secs, 30);
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CFP_API__BASE_URL", "http://localhost:5000");
            jail.set_env("CFP_GENERAL__DEFAULT_LIMIT", "5");
            let config: PortalConfig = PortalConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "http://localhost:5000");
            assert_eq!(config.general.default_limit, 5);
            Ok(())
        });
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(PortalConfig::default().validate().is_ok());
    }

    #[test]
    fn blank_base_url_fails_validation() {
        let mut config = PortalConfig::default();
        config.api.base_url = "   ".into();
        let error = config.validate().expect_err("blank base_url");
        assert!(error.to_string().contains("api.base_url"));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = PortalConfig::default();
        config.api.timeout_secs = 0;
        let error = config.validate().expect_err("zero timeout");
        assert!(error.to_string().contains("api.timeout_secs"));
    }

    #[test]
    fn zero_poll_interval_fails_validation() {
        let mut config = PortalConfig::default();
        config.general.poll_interval_secs = 0;
        let error = config.validate().expect_err("zero poll interval");
        assert!(error.to_string().contains("general.poll_interval_secs"));
    }

    #[test]
    fn local_toml_layers_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".cfp")?;
            jail.create_file(
                ".cfp/config.toml",
                r#"
                [api]
                base_url = "http://from-toml:8080"
                [sitemap]
                base_url = "https://portal.example.ac.ke"
                "#,
            )?;
            jail.set_env("CFP_API__BASE_URL", "http://from-env:9090");
            let config: PortalConfig = PortalConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "http://from-env:9090");
            assert_eq!(config.sitemap.base_url, "https://portal.example.ac.ke");
            Ok(())
        });
    }
}
