use crate::catalog::client::CatalogApi;
use crate::catalog::format::normalize_all;
use crate::catalog::types::Camera;
use crate::core::constants::BATCH_CAP;
use crate::favorites::id_set::FavoriteIdSet;
use crate::{Error, Result};
use futures::future::try_join_all;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Fetches full records for an identifier set in capped, concurrent batches.
///
/// All chunk requests are in flight at once and joined all-or-nothing: one
/// failed chunk discards every other result.
#[derive(Clone)]
pub struct BatchFetchScheduler {
    api: Arc<dyn CatalogApi>,
    cap: usize,
}

impl BatchFetchScheduler {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self::with_cap(api, BATCH_CAP)
    }

    pub fn with_cap(api: Arc<dyn CatalogApi>, cap: usize) -> Self {
        Self {
            api,
            cap: cap.max(1),
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Number of requests needed for `ids` identifiers.
    pub fn request_count(&self, ids: usize) -> usize {
        ids.div_ceil(self.cap)
    }

    /// Records for `ids`, normalized, in chunk-submission order.
    pub async fn fetch(
        &self,
        ids: &FavoriteIdSet,
        cancel: &CancellationToken,
    ) -> Result<Vec<Camera>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        log::debug!(
            "fetching {} cameras in {} batches of <= {}",
            ids.len(),
            self.request_count(ids.len()),
            self.cap
        );
        let requests = ids.chunks(self.cap).map(|chunk| self.api.cameras_by_ids(chunk));

        let chunks = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            joined = try_join_all(requests) => joined,
        };

        match chunks {
            Ok(chunks) => {
                let cameras = normalize_all(chunks.into_iter().flatten().collect());
                log::info!("fetched {} of {} favorite cameras", cameras.len(), ids.len());
                Ok(cameras)
            }
            Err(e) => {
                log::error!("batch fetch of {} cameras failed: {}", ids.len(), e);
                Err(e)
            }
        }
    }
}
