//! Handler für Standort, Follow-Modus und Berechtigung.

use crate::app::OverlayState;
use crate::core::GeoPoint;

pub fn set_location(state: &mut OverlayState, location: Option<GeoPoint>, bearing: Option<f64>) {
    state.follow.location = location;
    state.follow.bearing = bearing.filter(|b| b.is_finite());
}

pub fn set_enabled(state: &mut OverlayState, enabled: bool) {
    state.follow.enabled = enabled;
}

pub fn set_navigation_mode(state: &mut OverlayState, enabled: bool) {
    state.follow.navigation_mode = enabled;
}

/// Ohne Berechtigung pausiert die Follow-Kamera, der Schalter bleibt erhalten.
pub fn set_permission(state: &mut OverlayState, granted: bool) {
    if state.follow.permission_granted != granted {
        log::info!("Standort-Berechtigung {}", if granted { "erteilt" } else { "entzogen" });
    }
    state.follow.permission_granted = granted;
}
