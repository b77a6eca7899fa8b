use crate::core::provider::ProviderKind;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use tracing::debug;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const OPEN_ER_API_URL: &str = "https://open.er-api.com/v6/latest/";
pub const EXCHANGERATE_API_URL: &str = "https://api.exchangerate-api.com/v4/latest/";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderEndpoint {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProvidersConfig {
    pub open_er_api: ProviderEndpoint,
    pub exchangerate_api: ProviderEndpoint,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            open_er_api: ProviderEndpoint {
                base_url: OPEN_ER_API_URL.to_string(),
            },
            exchangerate_api: ProviderEndpoint {
                base_url: EXCHANGERATE_API_URL.to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderKind,
    pub timeout_secs: u64,
    pub providers: ProvidersConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            provider: ProviderKind::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            providers: ProvidersConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads `path` when given. Otherwise the default location is used if a
    /// file exists there, falling back to built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        let default_path = Self::default_config_path()?;
        if default_path.exists() {
            Self::load_from_path(&default_path)
        } else {
            debug!("No config file at {}, using defaults", default_path.display());
            Ok(Self::default())
        }
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "exchange")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        if config.timeout_secs == 0 {
            anyhow::bail!(
                "Invalid timeout_secs in config file {}: must be at least 1",
                path.as_ref().display()
            );
        }
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn base_url(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::OpenErApi => &self.providers.open_er_api.base_url,
            ProviderKind::ExchangerateApi => &self.providers.exchangerate_api.base_url,
        }
    }
}
