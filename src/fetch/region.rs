use crate::catalog::client::CatalogApi;
use crate::catalog::format::normalize_all;
use crate::catalog::types::Camera;
use crate::core::viewport::{QueryRegion, Viewport};
use crate::{Error, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Loads the cameras visible in a map viewport
#[derive(Clone)]
pub struct RegionFetcher {
    api: Arc<dyn CatalogApi>,
}

impl RegionFetcher {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Maps `viewport` to a query region and fetches the normalized records in it.
    pub async fn fetch(
        &self,
        viewport: &Viewport,
        cancel: &CancellationToken,
    ) -> Result<(QueryRegion, Vec<Camera>)> {
        let region = viewport.to_query_region()?;
        log::debug!("querying region {}", region.to_path_segment());

        let cameras = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            fetched = self.api.cameras_in_region(&region) => fetched?,
        };
        Ok((region, normalize_all(cameras)))
    }
}
