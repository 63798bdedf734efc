//! Effekt-Scheduling: Eingabe-Schlüssel berechnen und ausstehende Effekte ausführen.
//!
//! Nach jedem Command werden die Schlüssel aller Effekte neu berechnet und in
//! ihren Slots angemeldet. Ausgeführt wird erst, wenn die Karte bereit ist;
//! bis dahin sammeln sich die Requests (der letzte gewinnt).

use std::collections::BTreeMap;

use super::effect_slot::EffectSlot;
use super::state::{FollowState, OverlayState};
use super::use_cases::{camera_follow, direction_overlay, layer_sync};
use crate::core::{LocationType, MapLayer};
use crate::map::MapSurface;
use crate::render::IconFactories;

/// Eingaben eines Layer-Abgleichs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerKey {
    pub revision: u64,
    pub epoch: u64,
    pub options_revision: u64,
    pub active: bool,
}

impl LayerKey {
    /// Inaktive Layer hängen nur von der Karten-Epoche ab.
    fn inactive(epoch: u64) -> Self {
        Self {
            revision: 0,
            epoch,
            options_revision: 0,
            active: false,
        }
    }
}

/// Eingaben des Routen-Overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionKey {
    pub revision: u64,
    pub epoch: u64,
    pub options_revision: u64,
}

/// Eingaben der Follow-Kamera; `inputs` ist `None`, solange nicht gefolgt wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowKey {
    pub inputs: Option<FollowState>,
    pub epoch: u64,
    pub options_revision: u64,
}

/// Ein Slot pro Effekt.
#[derive(Debug, Clone)]
pub struct EffectSlots {
    pub weather: EffectSlot<LayerKey>,
    pub aqi: EffectSlot<LayerKey>,
    pub poi: BTreeMap<LocationType, EffectSlot<LayerKey>>,
    pub directions: EffectSlot<DirectionKey>,
    pub follow: EffectSlot<FollowKey>,
}

impl EffectSlots {
    pub fn new() -> Self {
        Self {
            weather: EffectSlot::new(),
            aqi: EffectSlot::new(),
            poi: LocationType::ALL
                .into_iter()
                .map(|t| (t, EffectSlot::new()))
                .collect(),
            directions: EffectSlot::new(),
            follow: EffectSlot::new(),
        }
    }

    /// Setzt alle Slots zurück (Karte verworfen).
    pub fn reset_all(&mut self) {
        self.weather.reset();
        self.aqi.reset();
        self.poi.values_mut().for_each(EffectSlot::reset);
        self.directions.reset();
        self.follow.reset();
    }

    /// Anzahl ausstehender Effekte.
    pub fn pending_count(&self) -> usize {
        [self.weather.is_pending(), self.aqi.is_pending(), self.directions.is_pending(), self.follow.is_pending()]
            .into_iter()
            .chain(self.poi.values().map(EffectSlot::is_pending))
            .filter(|pending| *pending)
            .count()
    }
}

impl Default for EffectSlots {
    fn default() -> Self {
        Self::new()
    }
}

fn layer_key(state: &OverlayState, layer: MapLayer, revision: u64) -> LayerKey {
    if !state.is_layer_active(layer) {
        return LayerKey::inactive(state.map.epoch);
    }
    LayerKey {
        revision,
        epoch: state.map.epoch,
        options_revision: state.options_revision,
        active: true,
    }
}

/// Meldet die aktuellen Eingaben aller Effekte an. Gibt die Zahl ausstehender Effekte zurück.
pub fn schedule(state: &mut OverlayState) -> usize {
    let revisions = state.data.revisions();
    let weather = layer_key(state, MapLayer::Weather, revisions.weather);
    let aqi = layer_key(state, MapLayer::Aqi, revisions.aqi);
    let pois: Vec<_> = LocationType::ALL
        .into_iter()
        .map(|t| (t, layer_key(state, MapLayer::for_location_type(t), revisions.pois)))
        .collect();
    let directions = DirectionKey {
        revision: revisions.plan,
        epoch: state.map.epoch,
        options_revision: state.options_revision,
    };
    let follow = FollowKey {
        inputs: state.follow.can_follow().then_some(state.follow),
        epoch: state.map.epoch,
        options_revision: state.options_revision,
    };

    let slots = &mut state.effects;
    slots.weather.request(weather);
    slots.aqi.request(aqi);
    for (location_type, key) in pois {
        if let Some(slot) = slots.poi.get_mut(&location_type) {
            slot.request(key);
        }
    }
    slots.directions.request(directions);
    slots.follow.request(follow);
    slots.pending_count()
}

/// Führt alle ausstehenden Effekte gegen die Karte aus. Gibt die Zahl der Läufe zurück.
///
/// Ohne bereite Karte bleibt alles ausstehend.
pub fn flush(
    state: &mut OverlayState,
    icons: &mut IconFactories,
    map: &mut dyn MapSurface,
) -> anyhow::Result<usize> {
    if !state.map.ready {
        return Ok(0);
    }
    let mut runs = 0;

    if let Some((key, ticket)) = state.effects.weather.take_pending() {
        layer_sync::sync_weather_layer(
            &mut state.registry,
            map,
            &mut icons.weather,
            state.data.weather(),
            key.active,
        );
        state.effects.weather.complete(ticket, key);
        runs += 1;
    }

    if let Some((key, ticket)) = state.effects.aqi.take_pending() {
        layer_sync::sync_aqi_layer(
            &mut state.registry,
            map,
            &mut icons.aqi,
            state.data.aqi(),
            key.active,
        );
        state.effects.aqi.complete(ticket, key);
        runs += 1;
    }

    for location_type in LocationType::ALL {
        let Some(slot) = state.effects.poi.get_mut(&location_type) else {
            continue;
        };
        let Some((key, ticket)) = slot.take_pending() else {
            continue;
        };
        layer_sync::sync_poi_layer(
            &mut state.registry,
            map,
            &mut icons.poi,
            state.data.pois(),
            location_type,
            key.active,
        );
        if let Some(slot) = state.effects.poi.get_mut(&location_type) {
            slot.complete(ticket, key);
        }
        runs += 1;
    }

    if let Some((key, ticket)) = state.effects.directions.take_pending() {
        direction_overlay::sync_direction_overlay(
            &mut state.registry,
            &mut state.route,
            map,
            &mut icons.poi,
            state.data.plan(),
            &state.options,
        );
        state.effects.directions.complete(ticket, key);
        runs += 1;
    }

    if let Some((key, ticket)) = state.effects.follow.take_pending() {
        if let Some(follow) = key.inputs {
            camera_follow::follow_camera(Some(&mut *map), &follow, &state.options)?;
        }
        state.effects.follow.complete(ticket, key);
        runs += 1;
    }

    log::debug!("{} Effekt(e) ausgeführt, {} Marker auf der Karte", runs, state.registry.len());
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::MapLifecycle;
    use crate::core::{GeoPoint, WeatherStationMarker};
    use crate::map::InMemoryMap;

    fn ready_state() -> OverlayState {
        let mut state = OverlayState::new();
        state.map = MapLifecycle { ready: true, epoch: 1 };
        state
    }

    #[test]
    fn test_schedule_requests_every_effect_once() {
        let mut state = ready_state();
        // Wetter, AQI, 4 POI-Typen, Route, Follow
        assert_eq!(schedule(&mut state), 8);

        let mut map = InMemoryMap::new(800, 600);
        let mut icons = IconFactories::default();
        assert_eq!(flush(&mut state, &mut icons, &mut map).expect("flush"), 8);

        assert_eq!(schedule(&mut state), 0);
    }

    #[test]
    fn test_flush_waits_for_ready_map() {
        let mut state = OverlayState::new();
        state.data.set_weather(vec![WeatherStationMarker::new(GeoPoint::new(21.0, 105.8), "Lang", "rain", None)]);
        schedule(&mut state);

        let mut map = InMemoryMap::new(800, 600);
        let mut icons = IconFactories::default();
        assert_eq!(flush(&mut state, &mut icons, &mut map).expect("flush"), 0);
        assert_eq!(map.marker_count(), 0);
        assert!(state.effects.weather.is_pending());
    }

    #[test]
    fn test_inactive_layer_ignores_data_changes() {
        let mut state = ready_state();
        state.active_layers.remove(&MapLayer::Weather);
        schedule(&mut state);
        let mut map = InMemoryMap::new(800, 600);
        let mut icons = IconFactories::default();
        flush(&mut state, &mut icons, &mut map).expect("flush");

        state.data.set_weather(vec![WeatherStationMarker::new(GeoPoint::new(21.0, 105.8), "Lang", "rain", None)]);
        assert_eq!(schedule(&mut state), 0);
    }
}
