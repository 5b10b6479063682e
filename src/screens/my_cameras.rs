use crate::catalog::client::CatalogApi;
use crate::catalog::types::Camera;
use crate::favorites::id_set::FavoriteIdSet;
use crate::favorites::reconciler::{Reconciliation, SetReconciler};
use crate::favorites::store::FavoriteStore;
use crate::fetch::batch::BatchFetchScheduler;
use crate::{Error, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// "My cameras" tab: the bookmarked cameras, refreshed on every focus
pub struct MyCamerasScreen {
    reconciler: SetReconciler,
    scheduler: BatchFetchScheduler,
    cameras: Vec<Camera>,
    loading: bool,
    failed: bool,
}

impl MyCamerasScreen {
    pub fn new(store: Arc<FavoriteStore>, api: Arc<dyn CatalogApi>) -> Self {
        Self::with_scheduler(store, BatchFetchScheduler::new(api))
    }

    pub fn with_scheduler(store: Arc<FavoriteStore>, scheduler: BatchFetchScheduler) -> Self {
        Self {
            reconciler: SetReconciler::new(store),
            scheduler,
            cameras: Vec::new(),
            loading: false,
            failed: false,
        }
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn favorites(&self) -> &FavoriteIdSet {
        self.reconciler.known()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the last refetch failed; the previous list is still shown.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Detail screen star button. Returns whether `id` is now a favorite;
    /// on a failed write the stored set is left as it was.
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool> {
        self.reconciler.store().toggle(id).await
    }

    /// Screen became active: reconcile with storage and refetch if needed.
    pub async fn on_focus(&mut self, cancel: &CancellationToken) -> Reconciliation {
        let outcome = self.reconciler.reconcile(cancel).await;
        match &outcome {
            Reconciliation::Cleared => {
                self.cameras.clear();
                self.failed = false;
            }
            Reconciliation::Changed(ids) => {
                let ids = ids.clone();
                self.refetch(&ids, cancel).await;
            }
            Reconciliation::Unchanged | Reconciliation::Stale => {}
        }
        outcome
    }

    async fn refetch(&mut self, ids: &FavoriteIdSet, cancel: &CancellationToken) {
        self.loading = true;
        let result = self.scheduler.fetch(ids, cancel).await;
        self.loading = false;

        match result {
            Ok(cameras) => {
                self.cameras = cameras;
                self.failed = false;
            }
            Err(Error::Cancelled) => {
                log::debug!("favorite refetch cancelled, retrying on next focus");
                self.reconciler.forget();
            }
            Err(_) => {
                // Already logged by the scheduler.
                self.failed = true;
                self.reconciler.forget();
            }
        }
    }
}
