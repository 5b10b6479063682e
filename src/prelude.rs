//! Prelude module for common camlet types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use camlet::prelude::*;`

pub use crate::core::{
    config::{CatalogConfig, ListProfile, StorageConfig},
    geo::LatLng,
    viewport::{QueryRegion, Viewport},
};

pub use crate::catalog::{
    client::CatalogApi,
    format::remove_city_from_title,
    types::{Camera, CameraPage, Location},
};

#[cfg(feature = "http")]
pub use crate::catalog::http::HttpCatalog;

pub use crate::favorites::{
    id_set::FavoriteIdSet,
    reconciler::{Reconciliation, SetReconciler},
    storage::{FileStore, KeyValueStore, MemoryStore},
    store::FavoriteStore,
};

pub use crate::fetch::{
    batch::BatchFetchScheduler,
    pagination::{PageCursor, PageOutcome, PaginatedListFetcher},
    region::RegionFetcher,
};

pub use crate::lifecycle::focus::{FocusEvent, ScreenFocus};

pub use crate::screens::{
    camera_list::CameraListScreen, map::MapScreen, my_cameras::MyCamerasScreen,
};

pub use crate::{Error as CamletError, Result};

pub use std::{sync::Arc, time::Duration};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

pub use tokio_util::sync::CancellationToken;
