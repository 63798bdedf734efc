//! Overlay State: zentrale Datenhaltung.

mod data;
mod follow;

pub use data::{DataRevisions, OverlayData};
pub use follow::FollowState;

use std::collections::BTreeSet;

use super::effects::EffectSlots;
use super::use_cases::direction_overlay::RouteOverlay;
use super::CommandLog;
use crate::core::{GeoPoint, MapLayer, MarkerInfo};
use crate::map::{MarkerHandle, MarkerMatch, MarkerRegistry, MarkerSpatialIndex};
use crate::shared::OverlayOptions;

/// Lebenszyklus der Karteninstanz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapLifecycle {
    /// Style geladen, Karte darf verändert werden
    pub ready: bool,
    /// Zählt Karteninstanzen; Handles gelten nur innerhalb einer Epoche
    pub epoch: u64,
}

/// Hauptzustand des Overlays
#[derive(Debug)]
pub struct OverlayState {
    /// Zuletzt gelieferte Domänendaten
    pub data: OverlayData,
    /// Aktive Layer
    pub active_layers: BTreeSet<MapLayer>,
    /// Eingaben der Follow-Kamera
    pub follow: FollowState,
    pub map: MapLifecycle,
    /// Gezeichnete Marker und ihre Detailinfos
    pub registry: MarkerRegistry,
    /// Gezeichnete Routen-Polyline
    pub route: RouteOverlay,
    /// Scheduling-Zustand aller Effekte
    pub effects: EffectSlots,
    /// Laufzeit-Optionen
    pub options: OverlayOptions,
    /// Steigt bei jeder Options-Änderung (Icons und Route neu zeichnen)
    pub options_revision: u64,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::with_options(OverlayOptions::default())
    }

    pub fn with_options(options: OverlayOptions) -> Self {
        Self {
            data: OverlayData::new(),
            active_layers: options.initial_layers.iter().copied().collect(),
            follow: FollowState::new(),
            map: MapLifecycle::default(),
            registry: MarkerRegistry::new(),
            route: RouteOverlay::new(),
            effects: EffectSlots::new(),
            options,
            options_revision: 0,
            command_log: CommandLog::new(),
        }
    }

    pub fn is_layer_active(&self, layer: MapLayer) -> bool {
        self.active_layers.contains(&layer)
    }

    /// Detailinfo zu einem angetippten Marker.
    pub fn marker_info(&self, handle: MarkerHandle) -> Option<&MarkerInfo> {
        self.registry.infos().get(handle)
    }

    /// Nächster Marker innerhalb von `radius_m` um einen Tap-Punkt.
    pub fn marker_near(&self, point: GeoPoint, radius_m: f64) -> Option<MarkerMatch> {
        MarkerSpatialIndex::from_infos(self.registry.infos())
            .nearest(point)
            .filter(|hit| hit.distance_m <= radius_m)
    }

    /// Anzahl aktuell gezeichneter Marker.
    pub fn marker_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}
