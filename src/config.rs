use std::{env, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogError};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const KEYRING_SERVICE: &str = "shelfmood";
pub const KEYRING_USER: &str = "gemini-api-key";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "No API key found: set GEMINI_API_KEY or store one in the keyring under shelfmood/gemini-api-key"
    )]
    MissingApiKey,

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub catalog: Catalog,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// The API key comes from `GEMINI_API_KEY`, falling back to the OS
    /// keyring. The option catalog comes from `SHELFMOOD_CATALOG`, then
    /// `catalog.toml` in the config directory, then the built-in table.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = match non_empty_var("GEMINI_API_KEY") {
            Some(key) => key,
            None => keyring_api_key().ok_or(ConfigError::MissingApiKey)?,
        };

        let mut api = ApiConfig::new(api_key);
        if let Some(base_url) = non_empty_var("GEMINI_BASE_URL") {
            api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = non_empty_var("GEMINI_MODEL") {
            api.model = model;
        }
        if let Some(raw) = non_empty_var("SHELFMOOD_TIMEOUT_SECS") {
            api.timeout = parse_timeout(&raw)?;
        }

        let catalog = load_catalog()?;
        debug!(?api, genres = catalog.genres().len(), "configuration loaded");

        Ok(Self { api, catalog })
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "shelfmood")
}

fn load_catalog() -> Result<Catalog, ConfigError> {
    let path = non_empty_var("SHELFMOOD_CATALOG")
        .map(PathBuf::from)
        .or_else(|| {
            project_dirs()
                .map(|dirs| dirs.config_dir().join("catalog.toml"))
                .filter(|path| path.exists())
        });

    match path {
        Some(path) => {
            info!("Loading option catalog from {}", path.display());
            Ok(Catalog::load(&path)?)
        }
        None => Ok(Catalog::default()),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            name: "SHELFMOOD_TIMEOUT_SECS",
            value: raw.to_string(),
        }),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
fn keyring_api_key() -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    match entry.get_password() {
        Ok(key) if !key.trim().is_empty() => Some(key),
        Ok(_) => None,
        Err(e) => {
            debug!("No API key in keyring: {}", e);
            None
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn keyring_api_key() -> Option<String> {
    None
}
