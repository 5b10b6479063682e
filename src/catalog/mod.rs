pub mod client;
pub mod format;
#[cfg(feature = "http")]
pub mod http;
pub mod types;

// Re-exports for convenience
pub use client::CatalogApi;
pub use format::remove_city_from_title;
#[cfg(feature = "http")]
pub use http::HttpCatalog;
pub use types::{Camera, CameraPage, Location};
