//! Follow-Kamera: führt die Karte dem Standort nach.

use anyhow::Context;

use crate::app::state::FollowState;
use crate::map::{CameraPosition, CameraUpdate, MapSurface};
use crate::shared::OverlayOptions;

/// Berechnet die Zielposition der Kamera aus aktueller Kamera und Standort.
///
/// Zoom bleibt erhalten, außer er liegt unter der Follow-Untergrenze. Ohne
/// Fahrtrichtung bleibt die Kartenausrichtung; die Neigung wird nur im
/// Navigationsmodus gesetzt.
pub fn follow_target(
    current: CameraPosition,
    follow: &FollowState,
    options: &OverlayOptions,
) -> Option<CameraPosition> {
    let location = follow.location?;
    Some(CameraPosition {
        target: location,
        zoom: options.follow_zoom(current.zoom),
        bearing: follow.bearing.unwrap_or(current.bearing),
        tilt: if follow.navigation_mode {
            options.navigation_tilt
        } else {
            current.tilt
        },
    })
}

/// Bewegt die Kamera animiert zum Standort.
///
/// No-op ohne Karte, ohne Standort, ohne Berechtigung oder bei
/// ausgeschaltetem Follow. Gibt die angefahrene Position zurück.
pub fn follow_camera(
    map: Option<&mut dyn MapSurface>,
    follow: &FollowState,
    options: &OverlayOptions,
) -> anyhow::Result<Option<CameraPosition>> {
    let Some(map) = map else {
        return Ok(None);
    };
    if !follow.can_follow() {
        return Ok(None);
    }
    let Some(target) = follow_target(map.camera_position(), follow, options) else {
        return Ok(None);
    };
    map.animate_camera(CameraUpdate::MoveTo(target))
        .context("Follow-Kamera konnte nicht bewegt werden")?;
    Ok(Some(target))
}
