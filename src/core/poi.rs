//! Points of Interest und ihre Typen.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;

/// Art eines Points of Interest; jede Art hat einen eigenen Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationType {
    ChargingStation,
    PublicPark,
    BicycleRental,
    TouristAttraction,
}

/// Trennzeichen-Läufe (alles außer Buchstaben und Ziffern).
static SEPARATORS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").ok());

/// Wortgrenzen in CamelCase (Kleinbuchstabe oder Ziffer vor Großbuchstabe).
static CAMEL_BOUNDARIES: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([\p{Ll}\p{N}])(\p{Lu})").ok());

impl LocationType {
    pub const ALL: [LocationType; 4] = [
        LocationType::ChargingStation,
        LocationType::PublicPark,
        LocationType::BicycleRental,
        LocationType::TouristAttraction,
    ];

    /// Anzeigename (auch Kategorie im Detail-Popup).
    pub fn label(&self) -> &'static str {
        match self {
            LocationType::ChargingStation => "Charging station",
            LocationType::PublicPark => "Public park",
            LocationType::BicycleRental => "Bicycle rental",
            LocationType::TouristAttraction => "Tourist attraction",
        }
    }

    /// Zweibuchstabiges Kürzel für die Badge.
    pub fn code(&self) -> &'static str {
        match self {
            LocationType::ChargingStation => "EV",
            LocationType::PublicPark => "PK",
            LocationType::BicycleRental => "BK",
            LocationType::TouristAttraction => "TA",
        }
    }

    /// Kanonischer Schlüssel wie ihn die API liefert.
    pub fn key(&self) -> &'static str {
        match self {
            LocationType::ChargingStation => "charging_station",
            LocationType::PublicPark => "public_park",
            LocationType::BicycleRental => "bicycle_rental",
            LocationType::TouristAttraction => "tourist_attraction",
        }
    }

    /// Parst einen rohen Typ-String unabhängig von Groß-/Kleinschreibung und
    /// Trennzeichen (`"CHARGING_STATION"`, `"charging-station"`,
    /// `"Charging Station"`, `"ChargingStation"`). Lokalisierte Bezeichnungen werden nicht erkannt.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_key(raw);
        if normalized.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|t| t.key() == normalized)
    }
}

fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim();
    let split = match CAMEL_BOUNDARIES.as_ref() {
        Some(re) => re.replace_all(trimmed, "${1}_${2}").into_owned(),
        None => trimmed.to_string(),
    };
    let lower = split.to_lowercase();
    let joined = match SEPARATORS.as_ref() {
        Some(re) => re.replace_all(&lower, "_").into_owned(),
        None => lower
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect(),
    };
    joined.trim_matches('_').to_string()
}

/// POI-Marker aus dem Repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPoiMarker {
    pub position: GeoPoint,
    pub name: String,
    pub location_type: LocationType,
    pub description: Option<String>,
    pub data_source: Option<String>,
}

impl LocationPoiMarker {
    pub fn new(position: GeoPoint, name: impl Into<String>, location_type: LocationType) -> Self {
        Self {
            position,
            name: name.into(),
            location_type,
            description: None,
            data_source: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_source = Some(source.into());
        self
    }
}
