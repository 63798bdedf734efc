//! Handler für die Layer-Auswahl.

use std::collections::BTreeSet;

use crate::app::OverlayState;
use crate::core::MapLayer;

/// Blendet einen Layer ein oder aus.
pub fn set_layer_active(state: &mut OverlayState, layer: MapLayer, active: bool) {
    let changed = if active {
        state.active_layers.insert(layer)
    } else {
        state.active_layers.remove(&layer)
    };
    if changed {
        log::debug!("Layer '{}' {}", layer.label(), if active { "an" } else { "aus" });
    }
}

/// Ersetzt die komplette Layer-Auswahl.
pub fn set_active_layers(state: &mut OverlayState, layers: BTreeSet<MapLayer>) {
    state.active_layers = layers;
}
