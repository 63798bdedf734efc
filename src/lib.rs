//! Airmap Overlay Library.
//! Marker- und Overlay-Logik der Karte als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod map;
pub mod render;
pub mod shared;

pub use app::{OverlayCommand, OverlayController, OverlayIntent, OverlayState};
pub use core::{
    compute_aqi, AqiCategory, AqiReading, AqiSample, AqiStationMarker, DirectionPlan,
    DirectionRoute, GeoBounds, GeoPoint, LocationPoiMarker, LocationType, MapLayer, MarkerInfo,
    PlanLocation, ViaPoi, WeatherStationMarker,
};
pub use map::{InMemoryMap, MapSurface, MarkerHandle, MarkerRegistry, MarkerSpatialIndex};
pub use render::{IconFactories, WeatherCondition};
pub use shared::OverlayOptions;
