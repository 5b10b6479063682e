use serde::{Deserialize, Serialize};

const MAX_LATITUDE: f64 = 90.0;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Offsets the coordinate by the given number of degrees
    pub fn offset(&self, d_lat: f64, d_lng: f64) -> Self {
        Self::new(self.lat + d_lat, self.lng + d_lng)
    }

    /// Formats as `lat,lng` for use in catalog URL paths
    pub fn to_path_segment(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
