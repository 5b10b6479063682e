use crate::core::constants::{
    MAX_LAT_DELTA_AT_MIN_ZOOM, MAX_LNG_DELTA_AT_MIN_ZOOM, MAX_QUERY_ZOOM, MIN_QUERY_ZOOM,
    USER_REGION_DELTA,
};
use crate::core::geo::LatLng;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// The visible region of a map: center point plus latitude/longitude span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(latitude: f64, longitude: f64, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Region shown on first launch, before the user's position is known
    pub fn world() -> Self {
        Self::new(
            20.700689035749388,
            20.830085165798664,
            110.88454576378447,
            126.56248658895493,
        )
    }

    /// Small region centered on the user's position
    pub fn around(position: LatLng) -> Self {
        Self::new(
            position.lat,
            position.lng,
            USER_REGION_DELTA,
            USER_REGION_DELTA,
        )
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Converts the viewport into the region the clustering endpoint accepts.
    ///
    /// Zoom is derived from the longitude span and clamped to
    /// [`MIN_QUERY_ZOOM`, `MAX_QUERY_ZOOM`]. Spans wider than the backend allows
    /// at that zoom are shrunk around the center before corners are computed.
    pub fn to_query_region(&self) -> Result<QueryRegion> {
        if !self.longitude_delta.is_finite() || self.longitude_delta <= 0.0 {
            return Err(Error::InvalidCoordinates(format!(
                "longitude delta must be positive, got {}",
                self.longitude_delta
            )));
        }
        if !self.latitude_delta.is_finite() || self.latitude_delta < 0.0 {
            return Err(Error::InvalidCoordinates(format!(
                "latitude delta must be non-negative, got {}",
                self.latitude_delta
            )));
        }

        let zoom = zoom_for_longitude_delta(self.longitude_delta);
        let (max_lat_delta, max_lng_delta) = max_deltas_at_zoom(zoom);
        let lat_delta = self.latitude_delta.min(max_lat_delta);
        let lng_delta = self.longitude_delta.min(max_lng_delta);

        let center = self.center();
        Ok(QueryRegion {
            top_right: center.offset(lat_delta / 2.0, lng_delta / 2.0),
            bottom_left: center.offset(-lat_delta / 2.0, -lng_delta / 2.0),
            zoom,
        })
    }
}

/// Bounding box and zoom level in the form the clustering endpoint expects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRegion {
    pub top_right: LatLng,
    pub bottom_left: LatLng,
    pub zoom: u8,
}

impl QueryRegion {
    pub fn latitude_span(&self) -> f64 {
        self.top_right.lat - self.bottom_left.lat
    }

    pub fn longitude_span(&self) -> f64 {
        self.top_right.lng - self.bottom_left.lng
    }

    /// `ne_lat,ne_lng,sw_lat,sw_lng,zoom` path segment of the map endpoint
    pub fn to_path_segment(&self) -> String {
        format!(
            "{},{},{}",
            self.top_right.to_path_segment(),
            self.bottom_left.to_path_segment(),
            self.zoom
        )
    }
}

/// `round(log2(360 / delta)) + 1`, ties to even, clamped to the backend range.
pub fn zoom_for_longitude_delta(longitude_delta: f64) -> u8 {
    let raw = (360.0 / longitude_delta).log2().round_ties_even() + 1.0;
    raw.clamp(MIN_QUERY_ZOOM as f64, MAX_QUERY_ZOOM as f64) as u8
}

/// Maximum (latitude, longitude) span the backend accepts at `zoom`.
pub fn max_deltas_at_zoom(zoom: u8) -> (f64, f64) {
    let steps = zoom.saturating_sub(MIN_QUERY_ZOOM) as i32;
    let divisor = 2_f64.powi(steps);
    (
        MAX_LAT_DELTA_AT_MIN_ZOOM / divisor,
        MAX_LNG_DELTA_AT_MIN_ZOOM / divisor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_zoom_matches_formula() {
        for delta in [0.0001, 0.01, 0.3, 0.5, 1.0, 7.5, 22.5, 45.0, 90.0, 180.0, 359.0] {
            let expected = ((360.0_f64 / delta).log2().round_ties_even() + 1.0).clamp(4.0, 18.0);
            assert_eq!(zoom_for_longitude_delta(delta) as f64, expected, "delta {delta}");
        }
    }

    #[test]
    fn test_zoom_clamped_to_backend_range() {
        assert_eq!(zoom_for_longitude_delta(360.0), MIN_QUERY_ZOOM);
        assert_eq!(zoom_for_longitude_delta(1000.0), MIN_QUERY_ZOOM);
        assert_eq!(zoom_for_longitude_delta(1e-9), MAX_QUERY_ZOOM);
    }

    #[test]
    fn test_exact_powers_of_two() {
        // 360 / 22.5 = 16 -> log2 = 4 -> zoom 5
        assert_eq!(zoom_for_longitude_delta(22.5), 5);
        // 360 / 0.3515625 = 1024 -> zoom 11
        assert_eq!(zoom_for_longitude_delta(0.3515625), 11);
    }

    #[test]
    fn test_max_deltas_halve_per_zoom() {
        assert_eq!(max_deltas_at_zoom(4), (22.5, 45.0));
        assert_eq!(max_deltas_at_zoom(5), (11.25, 22.5));
        assert_eq!(max_deltas_at_zoom(10), (22.5 / 64.0, 45.0 / 64.0));
    }

    #[test]
    fn test_world_viewport_is_clamped() {
        let region = Viewport::world().to_query_region().unwrap();
        assert_eq!(region.zoom, 4);
        assert!((region.latitude_span() - 22.5).abs() < EPSILON);
        assert!((region.longitude_span() - 45.0).abs() < EPSILON);
        let center = Viewport::world().center();
        assert!((region.top_right.lat - (center.lat + 11.25)).abs() < EPSILON);
        assert!((region.bottom_left.lng - (center.lng - 22.5)).abs() < EPSILON);
    }

    #[test]
    fn test_user_region_clamps_latitude_only() {
        let viewport = Viewport::around(LatLng::new(48.85, 2.35));
        let region = viewport.to_query_region().unwrap();
        // 360 / 0.5 = 720 -> log2 ~ 9.49 -> 9 -> zoom 10
        assert_eq!(region.zoom, 10);
        assert!((region.longitude_span() - 0.5).abs() < EPSILON);
        assert!((region.latitude_span() - 22.5 / 64.0).abs() < EPSILON);
    }

    #[test]
    fn test_small_viewport_untouched() {
        // 360 / 0.25 = 1440 -> log2 ~ 10.49 -> 10 -> zoom 11, max (0.176, 0.352)
        let viewport = Viewport::new(10.0, 20.0, 0.1, 0.25);
        let region = viewport.to_query_region().unwrap();
        assert_eq!(region.zoom, 11);
        assert!((region.top_right.lat - 10.05).abs() < EPSILON);
        assert!((region.top_right.lng - 20.125).abs() < EPSILON);
        assert!((region.bottom_left.lat - 9.95).abs() < EPSILON);
        assert!((region.bottom_left.lng - 19.875).abs() < EPSILON);
    }

    #[test]
    fn test_rounded_up_zoom_clamps_both_spans() {
        // 360 / 0.2 = 1800 -> log2 ~ 10.81 -> 11 -> zoom 12
        let region = Viewport::new(10.0, 20.0, 0.1, 0.2).to_query_region().unwrap();
        assert_eq!(region.zoom, 12);
        assert!((region.latitude_span() - 22.5 / 256.0).abs() < EPSILON);
        assert!((region.longitude_span() - 45.0 / 256.0).abs() < EPSILON);
    }

    #[test]
    fn test_spans_never_exceed_backend_maximum() {
        for lng_delta in [0.001, 0.05, 0.5, 3.0, 12.0, 40.0, 100.0, 300.0] {
            for lat_delta in [0.001, 1.0, 30.0, 150.0] {
                let region = Viewport::new(0.0, 0.0, lat_delta, lng_delta)
                    .to_query_region()
                    .unwrap();
                assert!((MIN_QUERY_ZOOM..=MAX_QUERY_ZOOM).contains(&region.zoom));
                let (max_lat, max_lng) = max_deltas_at_zoom(region.zoom);
                assert!(region.latitude_span() <= max_lat + EPSILON);
                assert!(region.longitude_span() <= max_lng + EPSILON);
            }
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let viewport = Viewport::new(-33.86, 151.2, 2.0, 3.0);
        assert_eq!(
            viewport.to_query_region().unwrap(),
            viewport.to_query_region().unwrap()
        );
    }

    #[test]
    fn test_rejects_non_positive_longitude_delta() {
        assert!(matches!(
            Viewport::new(0.0, 0.0, 1.0, 0.0).to_query_region(),
            Err(Error::InvalidCoordinates(_))
        ));
        assert!(Viewport::new(0.0, 0.0, 1.0, -2.0).to_query_region().is_err());
        assert!(Viewport::new(0.0, 0.0, 1.0, f64::NAN).to_query_region().is_err());
    }

    #[test]
    fn test_path_segment() {
        let region = QueryRegion {
            top_right: LatLng::new(1.0, 2.0),
            bottom_left: LatLng::new(-1.0, -2.0),
            zoom: 7,
        };
        assert_eq!(region.to_path_segment(), "1,2,-1,-2,7");
    }
}
