use super::client::CatalogApi;
use super::types::{ApiResponse, ApiResult, Camera, CameraPage};
use crate::core::config::CatalogConfig;
use crate::core::constants::{API_KEY_HEADER, WEBCAM_SECTIONS};
use crate::core::viewport::QueryRegion;
use crate::{Error, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// Shared async HTTP client, used by every catalog with the default timeout
/// and user agent
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    let defaults = CatalogConfig::default();
    build_client(&defaults).expect("failed to build reqwest async client")
});

fn build_client(config: &CatalogConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.request_timeout)
        .tcp_keepalive(std::time::Duration::from_secs(30))
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .build()
}

/// Catalog client talking to the webcam HTTP API
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        let defaults = CatalogConfig::default();
        let client = if config.request_timeout == defaults.request_timeout
            && config.user_agent == defaults.user_agent
        {
            HTTP_CLIENT.clone()
        } else {
            build_client(&config)?
        };
        Ok(Self { client, config })
    }

    /// Uses a caller-provided client, e.g. one with a proxy configured.
    pub fn with_client(config: CatalogConfig, client: reqwest::Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn get(&self, url: String) -> Result<Option<ApiResult>> {
        log::debug!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status().as_u16(),
                endpoint: strip_query(&url).to_string(),
            });
        }

        let body: ApiResponse = resp.json().await?;
        if !body.is_ok() {
            return Err(Error::Api(format!("catalog answered status {:?}", body.status)));
        }
        Ok(body.result)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn list_page(&self, offset: u32, limit: u32) -> Result<CameraPage> {
        let result = self
            .get(list_url(&self.config.base_url, offset, limit))
            .await?
            .ok_or_else(|| Error::Api("list response without result".into()))?;
        Ok(CameraPage::from(result))
    }

    async fn cameras_by_ids(&self, ids: &[String]) -> Result<Vec<Camera>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let result = self.get(ids_url(&self.config.base_url, ids)).await?;
        Ok(result.and_then(|r| r.webcams).unwrap_or_default())
    }

    async fn cameras_in_region(&self, region: &QueryRegion) -> Result<Vec<Camera>> {
        let result = self.get(region_url(&self.config.base_url, region)).await?;
        Ok(result.and_then(|r| r.webcams).unwrap_or_default())
    }
}

fn show_query() -> String {
    format!("show=webcams:{}", WEBCAM_SECTIONS.join(","))
}

fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

pub(crate) fn list_url(base_url: &str, offset: u32, limit: u32) -> String {
    format!(
        "{}/list/orderby=random/limit={},{}?{}",
        base_url,
        limit,
        offset,
        show_query()
    )
}

pub(crate) fn ids_url(base_url: &str, ids: &[String]) -> String {
    format!("{}/list/webcam={}?{}", base_url, ids.join(","), show_query())
}

pub(crate) fn region_url(base_url: &str, region: &QueryRegion) -> String {
    format!(
        "{}/map/{}?{}",
        base_url,
        region.to_path_segment(),
        show_query()
    )
}
