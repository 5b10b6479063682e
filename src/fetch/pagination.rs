use crate::catalog::client::CatalogApi;
use crate::catalog::format::normalize_all;
use crate::catalog::types::Camera;
use crate::{Error, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Offset/limit/total triple of an infinite-scroll list.
///
/// Cursors are plain values: each fetch takes one and hands back the cursor to
/// continue from, so nothing is shared between list instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    offset: u32,
    limit: u32,
    total: Option<u32>,
}

impl PageCursor {
    pub fn new(limit: u32) -> Self {
        Self {
            offset: 0,
            limit: limit.max(1),
            total: None,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Total reported by the last response, `None` before the first one.
    pub fn total(&self) -> Option<u32> {
        self.total
    }

    pub fn with_total(self, total: u32) -> Self {
        Self {
            total: Some(total),
            ..self
        }
    }

    /// Cursor for the following page, or `None` when the list is done.
    ///
    /// A page is only requested while `offset + limit` stays within the known
    /// total; with the total still unknown nothing further is requested.
    pub fn next(&self) -> Option<Self> {
        let total = u64::from(self.total?);
        let next_offset = u64::from(self.offset) + u64::from(self.limit);
        if next_offset + u64::from(self.limit) > total {
            return None;
        }
        Some(Self {
            offset: u32::try_from(next_offset).ok()?,
            ..*self
        })
    }

    pub fn is_exhausted(&self) -> bool {
        self.total.is_some() && self.next().is_none()
    }
}

/// Fetches the page `cursor` points at. Returns normalized records and the
/// cursor updated with the reported total.
pub async fn fetch_page(
    api: &dyn CatalogApi,
    cursor: PageCursor,
) -> Result<(Vec<Camera>, PageCursor)> {
    let page = api.list_page(cursor.offset, cursor.limit).await?;
    Ok((normalize_all(page.webcams), cursor.with_total(page.total)))
}

/// Result of a pagination step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Records appended
    Loaded(usize),
    /// No further page; not an error
    Exhausted,
    Failed,
    Cancelled,
}

/// Accumulating infinite-scroll list over the random-order catalog
pub struct PaginatedListFetcher {
    api: Arc<dyn CatalogApi>,
    cursor: PageCursor,
    cameras: Vec<Camera>,
    loading: bool,
    failed: bool,
}

impl PaginatedListFetcher {
    pub fn new(api: Arc<dyn CatalogApi>, page_size: u32) -> Self {
        Self {
            api,
            cursor: PageCursor::new(page_size),
            cameras: Vec::new(),
            loading: false,
            failed: false,
        }
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the last fetch failed
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Loads the page at the current cursor.
    pub async fn fetch_page(&mut self, cancel: &CancellationToken) -> PageOutcome {
        self.load(self.cursor, cancel).await
    }

    /// Scroll threshold crossed: load the next page if there is one.
    pub async fn on_end_reached(&mut self, cancel: &CancellationToken) -> PageOutcome {
        match self.cursor.next() {
            Some(next) => self.load(next, cancel).await,
            None => {
                log::debug!(
                    "end of list at offset {} (total {:?})",
                    self.cursor.offset,
                    self.cursor.total
                );
                PageOutcome::Exhausted
            }
        }
    }

    /// Drops accumulated records and starts again from offset 0.
    pub fn reset(&mut self) {
        self.cursor = PageCursor::new(self.cursor.limit);
        self.cameras.clear();
        self.failed = false;
    }

    async fn load(&mut self, cursor: PageCursor, cancel: &CancellationToken) -> PageOutcome {
        self.loading = true;
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            fetched = fetch_page(self.api.as_ref(), cursor) => fetched,
        };
        self.loading = false;

        match result {
            Ok((cameras, cursor)) => {
                let count = cameras.len();
                self.cameras.extend(cameras);
                self.cursor = cursor;
                self.failed = false;
                log::info!(
                    "loaded {} cameras at offset {} ({} of {:?})",
                    count,
                    cursor.offset,
                    self.cameras.len(),
                    cursor.total
                );
                PageOutcome::Loaded(count)
            }
            Err(Error::Cancelled) => {
                log::debug!("page fetch at offset {} cancelled", cursor.offset);
                PageOutcome::Cancelled
            }
            Err(e) => {
                log::error!("page fetch at offset {} failed: {}", cursor.offset, e);
                self.failed = true;
                PageOutcome::Failed
            }
        }
    }
}
