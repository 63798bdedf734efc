//! Wetter-Badges: Piktogramm nach Wetterlage plus Temperatur-Chip.

use airmap_badges::{render_badge, BadgeContent, BadgeStyle, Chip, Pictogram, Rgba};
use serde::{Deserialize, Serialize};

use super::icon_cache::IconCache;
use crate::map::MarkerIcon;

/// Aus dem Freitext des Wetterdienstes abgeleitete Wetterlage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Storm,
    Rain,
    Overcast,
    Cloudy,
    Fog,
    Snow,
    Clear,
    Unknown,
}

/// Schlüsselwörter in Prüfreihenfolge; der erste Treffer gewinnt.
const KEYWORDS: [(WeatherCondition, &[&str]); 7] = [
    (
        WeatherCondition::Storm,
        &["storm", "thunder", "dông", "giông", "bão"],
    ),
    (
        WeatherCondition::Rain,
        &["rain", "drizzle", "shower", "mưa"],
    ),
    (WeatherCondition::Overcast, &["overcast", "u ám", "âm u"]),
    (WeatherCondition::Cloudy, &["cloud", "mây"]),
    (WeatherCondition::Fog, &["fog", "mist", "haze", "sương"]),
    (WeatherCondition::Snow, &["snow", "sleet", "tuyết"]),
    (WeatherCondition::Clear, &["clear", "sun", "nắng", "quang"]),
];

impl WeatherCondition {
    /// Ordnet einen Freitext (englisch oder vietnamesisch) einer Wetterlage zu.
    pub fn classify(weather_type: &str) -> Self {
        let lowered = weather_type.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|word| lowered.contains(word)))
            .map_or(WeatherCondition::Unknown, |(condition, _)| *condition)
    }

    pub fn pictogram(&self) -> Pictogram {
        match self {
            WeatherCondition::Storm => Pictogram::Storm,
            WeatherCondition::Rain => Pictogram::Rain,
            WeatherCondition::Overcast => Pictogram::DarkCloud,
            WeatherCondition::Cloudy => Pictogram::Cloud,
            WeatherCondition::Fog => Pictogram::Fog,
            WeatherCondition::Snow => Pictogram::Snow,
            WeatherCondition::Clear => Pictogram::Sun,
            WeatherCondition::Unknown => Pictogram::Unknown,
        }
    }

    /// Grundfarbe der Badge.
    pub fn color(&self) -> Rgba {
        match self {
            WeatherCondition::Storm => [69, 90, 100, 255],
            WeatherCondition::Rain => [30, 136, 229, 255],
            WeatherCondition::Overcast => [120, 144, 156, 255],
            WeatherCondition::Cloudy => [100, 181, 246, 255],
            WeatherCondition::Fog => [176, 190, 197, 255],
            WeatherCondition::Snow => [129, 212, 250, 255],
            WeatherCondition::Clear => [255, 183, 77, 255],
            WeatherCondition::Unknown => [158, 158, 158, 255],
        }
    }
}

/// Cache-Schlüssel: Wetterlage und gerundete Temperatur.
pub type WeatherIconKey = (WeatherCondition, Option<i32>);

/// Erzeugt und cached Wetter-Badges.
#[derive(Debug, Clone)]
pub struct WeatherIconFactory {
    size: u32,
    cache: IconCache<WeatherIconKey>,
}

impl WeatherIconFactory {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            cache: IconCache::new(),
        }
    }

    /// Icon für Wetter-Freitext und Temperatur (°C).
    pub fn icon_for(&mut self, weather_type: &str, temperature: Option<f64>) -> MarkerIcon {
        let condition = WeatherCondition::classify(weather_type);
        let rounded = temperature.filter(|t| t.is_finite()).map(|t| t.round() as i32);
        self.icon_for_key((condition, rounded))
    }

    pub fn icon_for_key(&mut self, key: WeatherIconKey) -> MarkerIcon {
        let size = self.size;
        self.cache.get_or_render(key, || {
            let (condition, temperature) = key;
            let style = BadgeStyle::new(size, condition.color());
            let label = temperature.map(|t| format!("{t}°"));
            let chip = label.as_deref().map(|text| Chip {
                text,
                fill: airmap_badges::palette::WHITE,
            });
            log::debug!("Wetter-Icon gerendert: {:?} {:?}", condition, temperature);
            render_badge(&style, BadgeContent::Pictogram(condition.pictogram()), chip)
        })
    }

    pub fn cache(&self) -> &IconCache<WeatherIconKey> {
        &self.cache
    }
}
