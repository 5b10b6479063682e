use serde::{Deserialize, Deserializer, Serialize};

/// A public webcam as returned by the catalog
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

impl Camera {
    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().map(|location| location.city.as_str())
    }

    /// `"<city> - <country>"` line shown under the title in lists
    pub fn subtitle(&self) -> Option<String> {
        self.location
            .as_ref()
            .map(|location| format!("{} - {}", location.city, location.country))
    }

    pub fn icon_uri(&self) -> Option<&str> {
        self.image.as_ref()?.current.icon.as_deref()
    }

    pub fn is_live(&self) -> bool {
        self.player
            .as_ref()
            .and_then(|player| player.live.as_ref())
            .map(|stream| stream.available)
            .unwrap_or(false)
    }

    pub fn views(&self) -> u64 {
        self.statistics.as_ref().map(|s| s.views).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub continent_code: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub wikipedia: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub current: ImageUris,
    #[serde(default)]
    pub daylight: Option<ImageUris>,
    #[serde(default)]
    pub sizes: Option<ImageSizes>,
    /// Unix timestamp of the last image refresh
    #[serde(default)]
    pub update: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageUris {
    pub icon: Option<String>,
    pub thumbnail: Option<String>,
    pub preview: Option<String>,
    pub toenail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageSizes {
    pub icon: Option<ImageSize>,
    pub thumbnail: Option<ImageSize>,
    pub preview: Option<ImageSize>,
    pub toenail: Option<ImageSize>,
}

/// Stream descriptors for each timelapse period
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Player {
    pub live: Option<Stream>,
    pub day: Option<Stream>,
    pub month: Option<Stream>,
    pub year: Option<Stream>,
    pub lifetime: Option<Stream>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stream {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub embed: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub views: u64,
}

/// One page of the random-order list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CameraPage {
    pub offset: u32,
    pub limit: u32,
    pub total: u32,
    pub webcams: Vec<Camera>,
}

/// Envelope wrapping every catalog response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub result: Option<ApiResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiResult {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub webcams: Option<Vec<Camera>>,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

impl From<ApiResult> for CameraPage {
    fn from(result: ApiResult) -> Self {
        Self {
            offset: result.offset,
            limit: result.limit,
            total: result.total,
            webcams: result.webcams.unwrap_or_default(),
        }
    }
}

/// Webcam ids arrive as strings from the current API and as numbers from older dumps.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
