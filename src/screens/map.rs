use crate::catalog::client::CatalogApi;
use crate::catalog::types::Camera;
use crate::core::geo::LatLng;
use crate::core::viewport::{QueryRegion, Viewport};
use crate::fetch::region::RegionFetcher;
use crate::Error;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// "Map" tab: camera markers for whatever region the map shows
pub struct MapScreen {
    fetcher: RegionFetcher,
    viewport: Viewport,
    last_query: Option<QueryRegion>,
    markers: Vec<Camera>,
}

impl MapScreen {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            fetcher: RegionFetcher::new(api),
            viewport: Viewport::world(),
            last_query: None,
            markers: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn last_query(&self) -> Option<&QueryRegion> {
        self.last_query.as_ref()
    }

    pub fn markers(&self) -> &[Camera] {
        &self.markers
    }

    /// First display: centers on the user when a valid position is known,
    /// otherwise shows the world region, then loads its markers.
    pub async fn on_mount(&mut self, user_position: Option<LatLng>, cancel: &CancellationToken) {
        self.viewport = match user_position {
            Some(position) if position.is_valid() => Viewport::around(position),
            Some(position) => {
                log::warn!("ignoring invalid user position {:?}", position);
                Viewport::world()
            }
            None => Viewport::world(),
        };
        let viewport = self.viewport;
        self.on_region_change_complete(viewport, cancel).await;
    }

    /// The user stopped panning or zooming.
    pub async fn on_region_change_complete(
        &mut self,
        viewport: Viewport,
        cancel: &CancellationToken,
    ) {
        self.viewport = viewport;
        match self.fetcher.fetch(&viewport, cancel).await {
            Ok((region, cameras)) => {
                log::info!(
                    "{} cameras in region at zoom {}",
                    cameras.len(),
                    region.zoom
                );
                self.last_query = Some(region);
                self.markers = cameras;
            }
            Err(Error::Cancelled) => {}
            Err(e @ (Error::Status { .. } | Error::Api(_))) => {
                log::warn!("region query rejected, clearing markers: {}", e);
                self.markers.clear();
            }
            Err(e) => log::error!("region query failed: {}", e),
        }
    }
}
