//! # ll-configs
//!
//! Layered application configuration: built-in defaults, then an optional
//! `config/local-legends.{toml,yaml,json}` file, then `LL__`-prefixed
//! environment variables (`LL__FORUM__ANSWER_POLICY=on_first_reply`).
//! A `.env` file is loaded into the environment first when present.

use std::path::Path;

use config::{Config, File};
use ll_core::models::{AnswerPolicy, GeoPoint};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub use config::Environment;

pub const DEFAULT_CONFIG_FILE: &str = "config/local-legends";
pub const ENV_PREFIX: &str = "LL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub seed: SeedConfig,
    pub forum: ForumConfig,
    pub admin: AdminConfig,
    pub device: DeviceConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: "info,local_legends=debug".to_string(), json: false }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Load the demo requests and forum threads at startup.
    pub demo_data: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_data: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForumConfig {
    pub answer_policy: AnswerPolicy,
    pub title_max_len: usize,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self { answer_policy: AnswerPolicy::Manual, title_max_len: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Id stamped on replies written from the admin screens.
    pub id: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self { id: "admin1".to_string() }
    }
}

/// Fixed position reported by the console geolocation adapter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        // Hyderabad
        Self { latitude: 17.385, longitude: 78.4867 }
    }
}

impl DeviceConfig {
    pub fn position(&self) -> GeoPoint {
        GeoPoint { latitude: self.latitude, longitude: self.longitude }
    }
}

/// An `LL`-prefixed environment source that reads `vars` instead of the
/// process environment.
pub fn environment_from<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> Environment {
    let map = vars.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Environment::with_prefix(ENV_PREFIX).source(Some(map))
}

impl AppConfig {
    /// Loads `.env`, the default config file (if any) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        Self::load_from(Some(Path::new(DEFAULT_CONFIG_FILE)), Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads from an explicit file (optional on disk) and environment source.
    pub fn load_from(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        let cfg: AppConfig = builder
            .add_source(env.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forum.title_max_len == 0 {
            return Err(ConfigError::Invalid("forum.title_max_len must be positive".into()));
        }
        if self.admin.id.trim().is_empty() {
            return Err(ConfigError::Invalid("admin.id must not be empty".into()));
        }
        if !self.device.position().is_valid() {
            return Err(ConfigError::Invalid("device coordinates out of range".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&'static str, &'static str)]) -> Environment {
        environment_from(vars.iter().copied())
    }

    #[test]
    fn defaults_without_any_source() {
        let cfg = AppConfig::load_from(None, env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.forum.answer_policy, AnswerPolicy::Manual);
        assert_eq!(cfg.forum.title_max_len, 100);
        assert!(cfg.seed.demo_data);
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let cfg = AppConfig::load_from(
            None,
            env(&[
                ("LL__FORUM__ANSWER_POLICY", "on_first_public_reply"),
                ("LL__SEED__DEMO_DATA", "false"),
                ("LL__ADMIN__ID", "moderator7"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.forum.answer_policy, AnswerPolicy::OnFirstPublicReply);
        assert!(!cfg.seed.demo_data);
        assert_eq!(cfg.admin.id, "moderator7");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let cfg = AppConfig::load_from(Some(Path::new("does/not/exist.toml")), env(&[])).unwrap();
        assert_eq!(cfg.log, LogConfig::default());
    }

    #[test]
    fn rejects_zero_title_length() {
        let err = AppConfig::load_from(None, env(&[("LL__FORUM__TITLE_MAX_LEN", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
