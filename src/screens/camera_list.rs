use crate::catalog::client::CatalogApi;
use crate::catalog::types::Camera;
use crate::core::config::ListProfile;
use crate::fetch::pagination::{PageOutcome, PaginatedListFetcher};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// "Cameras" tab: endless random-order list of the whole catalog
pub struct CameraListScreen {
    fetcher: PaginatedListFetcher,
    started: bool,
}

impl CameraListScreen {
    pub fn new(api: Arc<dyn CatalogApi>, profile: ListProfile) -> Self {
        Self {
            fetcher: PaginatedListFetcher::new(api, profile.page_size()),
            started: false,
        }
    }

    pub fn cameras(&self) -> &[Camera] {
        self.fetcher.cameras()
    }

    /// Footer spinner
    pub fn is_loading(&self) -> bool {
        self.fetcher.is_loading()
    }

    pub fn has_failed(&self) -> bool {
        self.fetcher.has_failed()
    }

    /// Rows the list widget renders before the first scroll
    pub fn initial_num_to_render(&self) -> usize {
        self.fetcher.cursor().limit() as usize
    }

    pub fn fetcher(&self) -> &PaginatedListFetcher {
        &self.fetcher
    }

    /// Loads the first page once; later focus events keep the list as is.
    pub async fn on_focus(&mut self, cancel: &CancellationToken) -> Option<PageOutcome> {
        if self.started {
            return None;
        }
        Some(self.load_first_page(cancel).await)
    }

    pub async fn on_end_reached(&mut self, cancel: &CancellationToken) -> PageOutcome {
        if !self.started {
            return self.load_first_page(cancel).await;
        }
        self.fetcher.on_end_reached(cancel).await
    }

    /// Pull-to-refresh: a new random order from the first page.
    pub async fn refresh(&mut self, cancel: &CancellationToken) -> PageOutcome {
        self.fetcher.reset();
        self.started = false;
        self.load_first_page(cancel).await
    }

    async fn load_first_page(&mut self, cancel: &CancellationToken) -> PageOutcome {
        let outcome = self.fetcher.fetch_page(cancel).await;
        self.started = matches!(outcome, PageOutcome::Loaded(_));
        outcome
    }
}
