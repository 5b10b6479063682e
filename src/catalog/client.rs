use super::types::{Camera, CameraPage};
use crate::core::viewport::QueryRegion;
use crate::Result;
use async_trait::async_trait;

/// Remote webcam catalog.
///
/// Implementations return raw records; title normalization is applied by the
/// fetchers, exactly once per record.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `limit` records of the random-order list starting at `offset`.
    async fn list_page(&self, offset: u32, limit: u32) -> Result<CameraPage>;

    /// Records for the given identifiers. Callers keep `ids` within the batch cap.
    async fn cameras_by_ids(&self, ids: &[String]) -> Result<Vec<Camera>>;

    /// Records clustered inside `region`.
    async fn cameras_in_region(&self, region: &QueryRegion) -> Result<Vec<Camera>>;
}
