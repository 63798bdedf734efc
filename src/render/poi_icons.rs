//! POI-Badges: Kürzel des POI-Typs auf Typ-Farbe.

use airmap_badges::{render_badge, BadgeContent, BadgeStyle, Rgba};

use super::icon_cache::IconCache;
use crate::core::LocationType;
use crate::map::MarkerIcon;

/// Grundfarbe der Badge pro POI-Typ.
pub fn location_type_color(location_type: LocationType) -> Rgba {
    match location_type {
        LocationType::ChargingStation => [0, 150, 136, 255],
        LocationType::PublicPark => [67, 160, 71, 255],
        LocationType::BicycleRental => [251, 140, 0, 255],
        LocationType::TouristAttraction => [142, 36, 170, 255],
    }
}

/// Erzeugt und cached POI-Badges.
#[derive(Debug, Clone)]
pub struct PoiIconFactory {
    size: u32,
    cache: IconCache<LocationType>,
}

impl PoiIconFactory {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            cache: IconCache::new(),
        }
    }

    pub fn icon_for(&mut self, location_type: LocationType) -> MarkerIcon {
        let size = self.size;
        self.cache.get_or_render(location_type, || {
            let style = BadgeStyle::new(size, location_type_color(location_type));
            render_badge(&style, BadgeContent::Label(location_type.code()), None)
        })
    }

    pub fn cache(&self) -> &IconCache<LocationType> {
        &self.cache
    }
}
