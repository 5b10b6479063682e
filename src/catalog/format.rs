use super::types::Camera;

/// Drops the redundant `"<city>, "` prefix the catalog puts in front of titles.
///
/// Lengths are counted in UTF-16 code units, the unit the mobile client
/// measures titles in. Titles not longer than the city name are left alone.
/// The rewrite is not idempotent, so apply it exactly once per fetched record.
pub fn remove_city_from_title(mut camera: Camera) -> Camera {
    let Some(city_len) = camera.city().map(|city| city.encode_utf16().count()) else {
        return camera;
    };

    let units: Vec<u16> = camera.title.encode_utf16().collect();
    if units.len() > city_len {
        let rest = units.get(city_len + 2..).unwrap_or_default();
        camera.title = String::from_utf16_lossy(rest).trim().to_string();
    }
    camera
}

/// Normalizes a freshly fetched batch of records.
pub fn normalize_all(cameras: Vec<Camera>) -> Vec<Camera> {
    cameras.into_iter().map(remove_city_from_title).collect()
}
