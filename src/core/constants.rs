//! Core constants mirrored from the webcam catalog backend.
//! Keeping them in a single place makes it easier to track backend limit changes.

/// Maximum number of identifiers the catalog accepts in one lookup request.
pub const BATCH_CAP: usize = 25;

/// Lowest zoom level the clustering endpoint answers for.
pub const MIN_QUERY_ZOOM: u8 = 4;

/// Highest zoom level the clustering endpoint answers for.
pub const MAX_QUERY_ZOOM: u8 = 18;

/// Largest latitude span (degrees) accepted at [`MIN_QUERY_ZOOM`].
/// Halves with every zoom step above it.
pub const MAX_LAT_DELTA_AT_MIN_ZOOM: f64 = 22.5;

/// Largest longitude span (degrees) accepted at [`MIN_QUERY_ZOOM`].
pub const MAX_LNG_DELTA_AT_MIN_ZOOM: f64 = 45.0;

/// Page size of the regular camera list.
pub const COMPACT_PAGE_SIZE: u32 = 25;

/// Page size for callers that want fewer, larger round-trips.
pub const EXTENDED_PAGE_SIZE: u32 = 50;

/// Storage key holding the serialized favorite-camera list.
pub const FAVORITES_STORAGE_KEY: &str = "favoriteCameraIds";

/// Header carrying the catalog API key.
pub const API_KEY_HEADER: &str = "x-windy-key";

/// Sections requested for every webcam record.
pub const WEBCAM_SECTIONS: [&str; 4] = ["image", "location", "player", "statistics"];

/// Span (degrees) of the region shown around the user's own position.
pub const USER_REGION_DELTA: f64 = 0.5;
