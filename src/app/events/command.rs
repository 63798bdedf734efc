use std::collections::BTreeSet;

use crate::core::{
    AqiStationMarker, DirectionPlan, GeoPoint, LocationPoiMarker, MapLayer, WeatherStationMarker,
};
use crate::shared::OverlayOptions;

/// Mutierende Commands auf dem `OverlayState`.
#[derive(Debug, Clone)]
pub enum OverlayCommand {
    /// Karte als bereit markieren, neue Karten-Epoche beginnen
    AttachMap,
    /// Karte verwerfen, Handles vergessen
    DetachMap,
    SetWeatherStations { stations: Vec<WeatherStationMarker> },
    SetAqiStations { stations: Vec<AqiStationMarker> },
    SetPois { pois: Vec<LocationPoiMarker> },
    SetDirectionPlan { plan: Option<DirectionPlan> },
    SetLayerActive { layer: MapLayer, active: bool },
    SetActiveLayers { layers: BTreeSet<MapLayer> },
    SetLocation {
        location: Option<GeoPoint>,
        bearing: Option<f64>,
    },
    SetFollowEnabled { enabled: bool },
    SetNavigationMode { enabled: bool },
    SetLocationPermission { granted: bool },
    /// Optionen übernehmen (Icons werden neu gerendert)
    ApplyOptions { options: OverlayOptions },
}
