//! Detailinformationen zu einem gezeichneten Marker (Tap-Popup).
//!
//! Reine Anzeigedaten; maßgeblich bleiben die Domänen-Datensätze.

use serde::{Deserialize, Serialize};

use super::direction::{PlanLocation, ViaPoi};
use super::geo::GeoPoint;
use super::poi::{LocationPoiMarker, LocationType};
use super::station::{AqiStationMarker, WeatherStationMarker};

/// Kategorie der Wetter-Marker.
pub const CATEGORY_WEATHER: &str = "Weather";
/// Kategorie der AQI-Marker.
pub const CATEGORY_AQI: &str = "AQI";
/// Kategorie von Start- und Ziel-Marker einer Route.
pub const CATEGORY_DIRECTIONS: &str = "Directions";
/// Kategorie der Zwischenhalte einer Route.
pub const CATEGORY_VIA: &str = "Via";

/// Anzeigedaten für ein Marker-Popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerInfo {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub category: String,
    pub lat: f64,
    pub lon: f64,
}

impl MarkerInfo {
    /// Position als `GeoPoint`.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    fn at(position: GeoPoint, title: String, category: &str) -> Self {
        Self {
            title,
            subtitle: None,
            description: None,
            category: category.to_string(),
            lat: position.lat,
            lon: position.lon,
        }
    }

    /// Wetterstation: "<Wetter> · <t>°C".
    pub fn for_weather(station: &WeatherStationMarker) -> Self {
        let subtitle = match station.rounded_temperature() {
            Some(t) => format!("{} · {}°C", station.weather_type, t),
            None => station.weather_type.clone(),
        };
        Self {
            subtitle: Some(subtitle),
            ..Self::at(station.position, station.name.clone(), CATEGORY_WEATHER)
        }
    }

    /// AQI-Station: "AQI <n> · <Kategorie>" oder "No data".
    pub fn for_aqi(station: &AqiStationMarker) -> Self {
        let subtitle = match (station.aqi, station.category) {
            (Some(aqi), Some(category)) => format!("AQI {} · {}", aqi, category.label()),
            (Some(aqi), None) => format!("AQI {}", aqi),
            _ => "No data".to_string(),
        };
        Self {
            subtitle: Some(subtitle),
            ..Self::at(station.position, station.name.clone(), CATEGORY_AQI)
        }
    }

    /// POI: Kategorie ist der Typ-Name, Beschreibung enthält Text und Quelle.
    pub fn for_poi(poi: &LocationPoiMarker) -> Self {
        let description = match (&poi.description, &poi.data_source) {
            (Some(text), Some(source)) => Some(format!("{}\nSource: {}", text, source)),
            (Some(text), None) => Some(text.clone()),
            (None, Some(source)) => Some(format!("Source: {}", source)),
            (None, None) => None,
        };
        Self {
            subtitle: Some(poi.location_type.label().to_string()),
            description,
            ..Self::at(poi.position, poi.name.clone(), poi.location_type.label())
        }
    }

    /// Start- oder Ziel-Marker einer Route.
    pub fn for_endpoint(role: &str, location: &PlanLocation, summary: Option<String>) -> Self {
        Self {
            subtitle: Some(role.to_string()),
            description: summary,
            ..Self::at(location.position, location.name.clone(), CATEGORY_DIRECTIONS)
        }
    }

    /// Zwischenhalt; Untertitel ist der erkannte Typ oder der Rohstring.
    pub fn for_via(via: &ViaPoi, location_type: Option<LocationType>) -> Self {
        let subtitle = location_type
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| via.raw_type.clone());
        Self {
            subtitle: Some(subtitle),
            ..Self::at(via.position, via.name.clone(), CATEGORY_VIA)
        }
    }
}
