//! Icon-Factories für Marker-Badges.
//!
//! Jede Factory ist ein expliziter Cache von semantischem Schlüssel auf
//! gerastertes Bild. `IconFactories` bündelt alle drei und wird einmal
//! erzeugt und dem Controller übergeben.

mod aqi_icons;
mod icon_cache;
mod poi_icons;
mod weather_icons;

pub use aqi_icons::{AqiIconFactory, AqiIconKey, NO_DATA_COLOR, NO_DATA_LABEL};
pub use icon_cache::IconCache;
pub use poi_icons::{location_type_color, PoiIconFactory};
pub use weather_icons::{WeatherCondition, WeatherIconFactory, WeatherIconKey};

use crate::map::MarkerIcon;
use crate::shared::OverlayOptions;

/// Alle Icon-Factories des Overlays.
#[derive(Debug, Clone)]
pub struct IconFactories {
    pub weather: WeatherIconFactory,
    pub aqi: AqiIconFactory,
    pub poi: PoiIconFactory,
}

impl IconFactories {
    pub fn new(options: &OverlayOptions) -> Self {
        Self {
            weather: WeatherIconFactory::new(options.weather_badge_size),
            aqi: AqiIconFactory::new(options.aqi_badge_size),
            poi: PoiIconFactory::new(options.poi_badge_size),
        }
    }

    /// Anzahl aller gecachten Icons.
    pub fn cached_count(&self) -> usize {
        self.weather.cache().len() + self.aqi.cache().len() + self.poi.cache().len()
    }

    /// Alle gecachten Icons mit sprechendem Dateinamen (ohne Endung), sortiert.
    pub fn named_icons(&self) -> Vec<(String, MarkerIcon)> {
        let weather = self.weather.cache().iter().map(|((condition, temperature), icon)| {
            let temperature = temperature.map_or_else(|| "na".to_string(), |t| t.to_string());
            (format!("weather_{condition:?}_{temperature}"), icon.clone())
        });
        let aqi = self.aqi.cache().iter().map(|((value, category), icon)| {
            let value = value.map_or_else(|| "na".to_string(), |v| v.to_string());
            let category = category.map_or_else(|| "none".to_string(), |c| format!("{c:?}"));
            (format!("aqi_{value}_{category}"), icon.clone())
        });
        let poi = self
            .poi
            .cache()
            .iter()
            .map(|(location_type, icon)| (format!("poi_{}", location_type.key()), icon.clone()));

        let mut icons: Vec<_> = weather.chain(aqi).chain(poi).collect();
        icons.iter_mut().for_each(|(name, _)| *name = name.to_lowercase());
        icons.sort_by(|a, b| a.0.cmp(&b.0));
        icons
    }
}

impl Default for IconFactories {
    fn default() -> Self {
        Self::new(&OverlayOptions::default())
    }
}
