use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

static DEFAULT_LOG_LEVEL: &str = "warn";

/// Prefix for environment overrides, e.g. `DATEBOOK_COLOR=true`.
static ENV_PREFIX: &str = "DATEBOOK";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Settings from ~/.config/datebook/config.toml, overridable via DATEBOOK_* env vars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatebookConfig {
    /// Tracing filter used when neither RUST_LOG nor -v is given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Colorize error lines in session output
    #[serde(default)]
    pub color: bool,
}

impl Default for DatebookConfig {
    fn default() -> Self {
        DatebookConfig {
            log_level: default_log_level(),
            color: false,
        }
    }
}

impl DatebookConfig {
    /// Get the default config file path (~/.config/datebook/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("datebook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from `path`, or the default location when `None`.
    /// A missing file is fine; defaults and env overrides still apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        Self::load_from(&path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, env: Environment) -> Result<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .context("Failed to serialize config")
    }
}
