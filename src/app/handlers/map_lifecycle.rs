//! Handler für den Lebenszyklus der Karteninstanz.

use crate::app::use_cases::direction_overlay::clear_direction_overlay;
use crate::app::OverlayState;
use crate::map::MapSurface;

/// Neue Karteninstanz ist bereit: neue Epoche, alte Handles vergessen.
///
/// Alle Effekte werden über die geänderte Epoche neu angemeldet.
pub fn attach(state: &mut OverlayState) {
    forget_map_handles(state);
    state.map.ready = true;
    state.map.epoch += 1;
    log::info!("Karte bereit (Epoche {})", state.map.epoch);
}

/// Erneutes Bereit-Signal derselben Karte: alles Gezeichnete abbauen,
/// danach wie `attach`.
pub fn reattach(state: &mut OverlayState, map: &mut dyn MapSurface) {
    let mut removed = clear_direction_overlay(&mut state.registry, &mut state.route, map);
    removed += state.registry.clear_all(map);
    log::debug!("Karte erneut bereit, {} Marker abgebaut", removed);
    attach(state);
}

/// Karteninstanz verworfen: Effekte pausieren bis zur nächsten Karte.
pub fn detach(state: &mut OverlayState) {
    forget_map_handles(state);
    state.map.ready = false;
    log::info!("Karte freigegeben (Epoche {})", state.map.epoch);
}

fn forget_map_handles(state: &mut OverlayState) {
    state.registry.forget_all();
    state.route.forget();
    state.effects.reset_all();
}
