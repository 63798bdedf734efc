//! AQI-Badges: Indexwert auf Kategorie-Farbe.

use airmap_badges::{palette, render_badge, BadgeContent, BadgeStyle, Rgba};

use super::icon_cache::IconCache;
use crate::core::AqiCategory;
use crate::map::MarkerIcon;

/// Füllfarbe für Stationen ohne Messwert.
pub const NO_DATA_COLOR: Rgba = [158, 158, 158, 255];
/// Label für Stationen ohne Messwert.
pub const NO_DATA_LABEL: &str = "--";

/// Cache-Schlüssel: Indexwert und Kategorie.
pub type AqiIconKey = (Option<i32>, Option<AqiCategory>);

/// Erzeugt und cached AQI-Badges.
#[derive(Debug, Clone)]
pub struct AqiIconFactory {
    size: u32,
    cache: IconCache<AqiIconKey>,
}

impl AqiIconFactory {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            cache: IconCache::new(),
        }
    }

    pub fn icon_for(&mut self, aqi: Option<i32>, category: Option<AqiCategory>) -> MarkerIcon {
        let size = self.size;
        self.cache.get_or_render((aqi, category), || {
            let fill = category.map_or(NO_DATA_COLOR, |c| palette::opaque(c.color()));
            let label = aqi.map_or_else(|| NO_DATA_LABEL.to_string(), |value| value.to_string());
            log::debug!("AQI-Icon gerendert: {} ({:?})", label, category);
            render_badge(&BadgeStyle::new(size, fill), BadgeContent::Label(&label), None)
        })
    }

    pub fn cache(&self) -> &IconCache<AqiIconKey> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_same_key_returns_same_instance() {
        let mut factory = AqiIconFactory::new(48);
        let a = factory.icon_for(Some(126), Some(AqiCategory::UnhealthyForSensitive));
        let b = factory.icon_for(Some(126), Some(AqiCategory::UnhealthyForSensitive));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(factory.cache().len(), 1);
    }

    #[test]
    fn test_missing_value_uses_grey_badge() {
        let mut factory = AqiIconFactory::new(48);
        let icon = factory.icon_for(None, None);
        // Mittelpunkt liegt im Label, daher ein Pixel am oberen Innenrand
        let pixel = icon.get_pixel(24, 8).0;
        assert_eq!(pixel[3], 255);
        assert!(pixel[0] == pixel[1] && pixel[1] == pixel[2], "grau erwartet: {:?}", pixel);
    }

    #[test]
    fn test_three_digit_values_render() {
        let mut factory = AqiIconFactory::new(40);
        let small = factory.icon_for(Some(42), Some(AqiCategory::Good));
        let large = factory.icon_for(Some(487), Some(AqiCategory::VeryHazardous));
        assert_eq!(small.dimensions(), large.dimensions());
        assert_eq!(factory.cache().len(), 2);
    }
}
