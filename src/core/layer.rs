//! Ein-/ausschaltbare Overlay-Layer der Karte.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::poi::LocationType;

/// Overlay-Kategorie, die der Nutzer ein- und ausblenden kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MapLayer {
    Weather,
    Aqi,
    ChargingStations,
    PublicParks,
    BicycleRentals,
    TouristAttractions,
}

impl MapLayer {
    pub const ALL: [MapLayer; 6] = [
        MapLayer::Weather,
        MapLayer::Aqi,
        MapLayer::ChargingStations,
        MapLayer::PublicParks,
        MapLayer::BicycleRentals,
        MapLayer::TouristAttractions,
    ];

    /// Zugehöriger POI-Typ (nur für POI-Layer).
    pub fn location_type(&self) -> Option<LocationType> {
        match self {
            MapLayer::Weather | MapLayer::Aqi => None,
            MapLayer::ChargingStations => Some(LocationType::ChargingStation),
            MapLayer::PublicParks => Some(LocationType::PublicPark),
            MapLayer::BicycleRentals => Some(LocationType::BicycleRental),
            MapLayer::TouristAttractions => Some(LocationType::TouristAttraction),
        }
    }

    /// Layer für einen POI-Typ.
    pub fn for_location_type(location_type: LocationType) -> MapLayer {
        match location_type {
            LocationType::ChargingStation => MapLayer::ChargingStations,
            LocationType::PublicPark => MapLayer::PublicParks,
            LocationType::BicycleRental => MapLayer::BicycleRentals,
            LocationType::TouristAttraction => MapLayer::TouristAttractions,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MapLayer::Weather => "Weather",
            MapLayer::Aqi => "Air quality",
            MapLayer::ChargingStations => "Charging stations",
            MapLayer::PublicParks => "Parks",
            MapLayer::BicycleRentals => "Bicycle rentals",
            MapLayer::TouristAttractions => "Attractions",
        }
    }

    /// Menge aller Layer (Startzustand der Karte).
    pub fn all() -> BTreeSet<MapLayer> {
        Self::ALL.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_type_roundtrip() {
        for location_type in LocationType::ALL {
            let layer = MapLayer::for_location_type(location_type);
            assert_eq!(layer.location_type(), Some(location_type));
        }
        assert_eq!(MapLayer::Weather.location_type(), None);
        assert_eq!(MapLayer::Aqi.location_type(), None);
    }

    #[test]
    fn test_all_contains_every_layer() {
        assert_eq!(MapLayer::all().len(), MapLayer::ALL.len());
    }
}
