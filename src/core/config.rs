//! Configuration for the catalog client, list pagination and favorite storage
//!
//! Values can be built by hand, resolved from presets, or read from the
//! environment (`API_BASE_URL`, `API_KEY`) the same way the mobile build reads
//! its `.env` file.

use crate::core::constants::{
    BATCH_CAP, COMPACT_PAGE_SIZE, EXTENDED_PAGE_SIZE, FAVORITES_STORAGE_KEY,
};
use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const BASE_URL_ENV: &str = "API_BASE_URL";
pub const API_KEY_ENV: &str = "API_KEY";
pub const STORAGE_DIR_ENV: &str = "CAMLET_STORAGE_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the webcam API, without trailing slash
    pub base_url: String,
    pub api_key: String,
    /// Maximum identifiers per batch lookup
    pub batch_cap: usize,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Reads `API_BASE_URL` and `API_KEY` from the process environment.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV)
            .map_err(|_| Error::Config(format!("{BASE_URL_ENV} is not set")))?;
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{API_KEY_ENV} is not set")))?;
        let config = Self::new(base_url, api_key);
        config.validate()?;
        Ok(config)
    }

    pub fn with_batch_cap(mut self, batch_cap: usize) -> Self {
        self.batch_cap = batch_cap;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::Config("base url is empty".into()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "base url must be http(s), got {}",
                self.base_url
            )));
        }
        if self.api_key.is_empty() {
            return Err(Error::Config("api key is empty".into()));
        }
        if self.batch_cap == 0 || self.batch_cap > BATCH_CAP {
            return Err(Error::Config(format!(
                "batch cap must be within 1..={BATCH_CAP}, got {}",
                self.batch_cap
            )));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            batch_cap: BATCH_CAP,
            request_timeout: Duration::from_secs(30),
            user_agent: format!("camlet/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Page size presets for infinite-scroll lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListProfile {
    /// Regular camera list
    #[default]
    Compact,
    Extended,
    Custom(u32),
}

impl ListProfile {
    pub fn page_size(&self) -> u32 {
        match self {
            Self::Compact => COMPACT_PAGE_SIZE,
            Self::Extended => EXTENDED_PAGE_SIZE,
            Self::Custom(size) => (*size).max(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub key: String,
    /// Directory for the file-backed store
    pub directory: PathBuf,
}

impl StorageConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            key: FAVORITES_STORAGE_KEY.to_string(),
            directory: directory.into(),
        }
    }

    /// Uses `CAMLET_STORAGE_DIR` when set, `.camlet` in the working directory otherwise.
    pub fn from_env() -> Self {
        let directory = std::env::var_os(STORAGE_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".camlet"));
        Self::new(directory)
    }
}
