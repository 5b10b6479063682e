//! # Camlet
//!
//! Favorites synchronization and viewport query engine for public webcam
//! catalogs.
//!
//! The crate keeps a persisted set of bookmarked camera identifiers consistent
//! across screens, turns that set into batched catalog lookups, maps a map
//! viewport to a backend query region and drives offset pagination for the
//! random-order camera list. Screens are thin layers over the models in
//! [`screens`].

pub mod catalog;
pub mod core;
pub mod favorites;
pub mod fetch;
pub mod lifecycle;
pub mod prelude;
pub mod screens;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::{CatalogConfig, ListProfile, StorageConfig},
    geo::LatLng,
    viewport::{QueryRegion, Viewport},
};

pub use catalog::{client::CatalogApi, types::Camera};

#[cfg(feature = "http")]
pub use catalog::http::HttpCatalog;

pub use favorites::{
    id_set::FavoriteIdSet,
    reconciler::{Reconciliation, SetReconciler},
    storage::{FileStore, KeyValueStore, MemoryStore},
    store::FavoriteStore,
};

pub use fetch::{
    batch::BatchFetchScheduler,
    pagination::{PageCursor, PageOutcome, PaginatedListFetcher},
    region::RegionFetcher,
};

pub use lifecycle::focus::{FocusEvent, ScreenFocus};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum CamletError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "http")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{endpoint} returned HTTP {status}")]
    Status { status: u16, endpoint: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Error type alias for convenience
pub type Error = CamletError;

/// Install `env_logger` as the `log` backend. Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
