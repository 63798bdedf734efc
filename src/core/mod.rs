//! Core-Domänentypen: Stationen, POIs, Routen, Layer und AQI-Berechnung.

pub mod aqi;
pub mod direction;
pub mod geo;
pub mod layer;
pub mod marker_info;
pub mod poi;
pub mod station;

pub use aqi::{compute_aqi, compute_aqi_with, AqiBreakpoint, AqiCategory, AqiReading, PM25_BREAKPOINTS};
pub use direction::{DirectionPlan, DirectionRoute, PlanLocation, ViaPoi};
pub use geo::{GeoBounds, GeoPoint};
pub use layer::MapLayer;
pub use marker_info::MarkerInfo;
pub use poi::{LocationPoiMarker, LocationType};
pub use station::{AqiSample, AqiStationMarker, WeatherStationMarker};
