//! Handler für neue Domänendaten der Repositories.

use crate::app::OverlayState;
use crate::core::{AqiStationMarker, DirectionPlan, LocationPoiMarker, WeatherStationMarker};

pub fn set_weather_stations(state: &mut OverlayState, stations: Vec<WeatherStationMarker>) {
    let count = stations.len();
    if state.data.set_weather(stations) {
        log::debug!("{} Wetterstationen übernommen", count);
    }
}

pub fn set_aqi_stations(state: &mut OverlayState, stations: Vec<AqiStationMarker>) {
    let count = stations.len();
    if state.data.set_aqi(stations) {
        log::debug!("{} AQI-Stationen übernommen", count);
    }
}

pub fn set_pois(state: &mut OverlayState, pois: Vec<LocationPoiMarker>) {
    let count = pois.len();
    if state.data.set_pois(pois) {
        log::debug!("{} POIs übernommen", count);
    }
}

pub fn set_direction_plan(state: &mut OverlayState, plan: Option<DirectionPlan>) {
    let summary = plan.as_ref().map(DirectionPlan::describe);
    if state.data.set_plan(plan) {
        match summary {
            Some(summary) => log::info!("Neue Route: {}", summary),
            None => log::info!("Route verworfen"),
        }
    }
}
