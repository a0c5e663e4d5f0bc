//! What the front end needs to draw a lookup: the location card, the map
//! marker, and a serializable projection of [`LookupState`].

use ipapi_rs::GeoResult;
use serde::Serialize;

use super::state::LookupState;

pub const MAP_ZOOM: u8 = 13;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationCard {
    pub ip: Option<String>,
    pub city: Option<String>,
    pub region_name: Option<String>,
    pub country_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&GeoResult> for LocationCard {
    fn from(result: &GeoResult) -> Self {
        Self {
            ip: result.ip.clone(),
            city: result.city.clone(),
            region_name: result.region_name.clone(),
            country_name: result.country_name.clone(),
            latitude: result.latitude,
            longitude: result.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub popup: String,
    pub flag_url: Option<String>,
}

impl MapMarker {
    /// Returns `None` unless both coordinates are present and non-zero.
    pub fn from_result(result: &GeoResult) -> Option<Self> {
        let latitude = result.latitude.filter(|v| *v != 0.0)?;
        let longitude = result.longitude.filter(|v| *v != 0.0)?;

        let popup = format!(
            "{}, {}",
            result.city.as_deref().unwrap_or_default(),
            result.country_name.as_deref().unwrap_or_default()
        );
        let flag_url = result
            .location
            .as_ref()
            .and_then(|l| l.country_flag.as_deref())
            .filter(|url| !url.is_empty())
            .map(str::to_owned);

        Some(Self {
            latitude,
            longitude,
            zoom: MAP_ZOOM,
            popup,
            flag_url,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupView {
    Idle,
    Loading,
    Success {
        result: GeoResult,
        card: LocationCard,
        marker: Option<MapMarker>,
    },
    Error {
        message: String,
    },
}

impl From<&LookupState> for LookupView {
    fn from(state: &LookupState) -> Self {
        match state {
            LookupState::Idle => LookupView::Idle,
            LookupState::Loading => LookupView::Loading,
            LookupState::Success(result) => LookupView::Success {
                card: LocationCard::from(result),
                marker: MapMarker::from_result(result),
                result: result.clone(),
            },
            LookupState::Error(message) => LookupView::Error {
                message: message.clone(),
            },
        }
    }
}
