//! Messstationen für Wetter- und Luftqualitäts-Layer.

use serde::{Deserialize, Serialize};

use super::aqi::{self, AqiCategory};
use super::geo::GeoPoint;

/// Wetterstation, wird bei jedem Abruf komplett neu aufgebaut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherStationMarker {
    pub position: GeoPoint,
    pub name: String,
    /// Freitext aus dem Feed, z.B. "heavy rain shower" oder "mưa to"
    pub weather_type: String,
    /// Temperatur in °C
    pub temperature: Option<f64>,
}

impl WeatherStationMarker {
    pub fn new(
        position: GeoPoint,
        name: impl Into<String>,
        weather_type: impl Into<String>,
        temperature: Option<f64>,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            weather_type: weather_type.into(),
            temperature: temperature.filter(|t| t.is_finite()),
        }
    }

    /// Gerundete Temperatur für Anzeige und Icon-Cache.
    pub fn rounded_temperature(&self) -> Option<i32> {
        self.temperature
            .filter(|t| t.is_finite())
            .map(|t| t.round() as i32)
    }
}

/// Luftqualitäts-Station mit bereits berechnetem Index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiStationMarker {
    pub position: GeoPoint,
    pub name: String,
    pub aqi: Option<i32>,
    pub category: Option<AqiCategory>,
}

impl AqiStationMarker {
    /// Leitet Index und Kategorie aus einer PM2.5-Konzentration ab.
    ///
    /// Fehlt die Messung, bleiben Index und Kategorie leer.
    pub fn from_concentration(position: GeoPoint, name: impl Into<String>, pm25: Option<f64>) -> Self {
        let reading = pm25.and_then(aqi::compute_aqi);
        Self {
            position,
            name: name.into(),
            aqi: reading.map(|r| r.index),
            category: reading.map(|r| r.category),
        }
    }
}

/// Rohmessung einer Luftqualitäts-Station, wie sie vom Repository kommt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiSample {
    pub position: GeoPoint,
    pub name: String,
    /// PM2.5 in µg/m³
    pub pm25: Option<f64>,
}

impl From<&AqiSample> for AqiStationMarker {
    fn from(sample: &AqiSample) -> Self {
        AqiStationMarker::from_concentration(sample.position, sample.name.clone(), sample.pm25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_concentration_computes_index() {
        let station = AqiStationMarker::from_concentration(GeoPoint::new(21.0, 105.8), "Hoan Kiem", Some(25.0));
        assert_eq!(station.aqi, Some(50));
        assert_eq!(station.category, Some(AqiCategory::Good));
    }

    #[test]
    fn test_missing_concentration_leaves_index_empty() {
        let station = AqiStationMarker::from_concentration(GeoPoint::new(21.0, 105.8), "Offline", None);
        assert_eq!(station.aqi, None);
        assert_eq!(station.category, None);
    }

    #[test]
    fn test_rounded_temperature() {
        let mut station = WeatherStationMarker::new(GeoPoint::default(), "Lang", "clear", Some(28.6));
        assert_eq!(station.rounded_temperature(), Some(29));
        station.temperature = Some(f64::NAN);
        assert_eq!(station.rounded_temperature(), None);
    }
}
