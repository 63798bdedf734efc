//! Routen-Overlay: Polyline, Start-/Ziel-Marker und Zwischenhalte.

use crate::core::{DirectionPlan, GeoBounds, LocationType, MarkerInfo};
use crate::map::{
    CameraUpdate, MapSurface, MarkerGroup, MarkerOptions, MarkerRegistry, PolylineHandle,
    PolylineOptions,
};
use crate::render::PoiIconFactory;
use crate::shared::OverlayOptions;

/// Untertitel des Start-Markers.
pub const START_ROLE: &str = "Start";
/// Untertitel des Ziel-Markers.
pub const DESTINATION_ROLE: &str = "Destination";

/// Handle der aktuell gezeichneten Routen-Polyline.
///
/// Start-, Ziel- und Via-Marker liegen in der Registry unter
/// `MarkerGroup::Directions`.
#[derive(Debug, Clone, Default)]
pub struct RouteOverlay {
    polyline: Option<PolylineHandle>,
}

impl RouteOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polyline(&self) -> Option<PolylineHandle> {
        self.polyline
    }

    /// Vergisst das Handle, ohne die Karte anzufassen (Karte wurde ersetzt).
    pub fn forget(&mut self) {
        self.polyline = None;
    }
}

/// Was beim letzten Abgleich gezeichnet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionOverlayOutcome {
    pub polyline_drawn: bool,
    pub endpoint_markers: usize,
    pub via_markers: usize,
    /// Zwischenhalte ohne erkannten POI-Typ (ohne eigenes Icon gezeichnet)
    pub unresolved_vias: usize,
    pub camera_fitted: bool,
}

/// Entfernt Polyline und alle Routen-Marker.
pub fn clear_direction_overlay(
    registry: &mut MarkerRegistry,
    overlay: &mut RouteOverlay,
    map: &mut dyn MapSurface,
) -> usize {
    if let Some(handle) = overlay.polyline.take() {
        map.remove_polyline(handle);
    }
    registry.clear_group(map, MarkerGroup::Directions)
}

/// Zeichnet das Overlay für `plan` neu; `None` oder eine Route mit weniger als
/// zwei Punkten räumt nur ab.
pub fn sync_direction_overlay(
    registry: &mut MarkerRegistry,
    overlay: &mut RouteOverlay,
    map: &mut dyn MapSurface,
    icons: &mut PoiIconFactory,
    plan: Option<&DirectionPlan>,
    options: &OverlayOptions,
) -> DirectionOverlayOutcome {
    clear_direction_overlay(registry, overlay, map);

    let Some(plan) = plan.filter(|plan| plan.route.is_drawable()) else {
        if plan.is_some() {
            log::debug!("Route ohne zeichenbare Geometrie, Overlay bleibt leer");
        }
        return DirectionOverlayOutcome::default();
    };

    let mut outcome = DirectionOverlayOutcome::default();

    overlay.polyline = Some(map.add_polyline(PolylineOptions {
        points: plan.route.points.clone(),
        color: options.route_color,
        width_px: options.route_width_px,
    }));
    outcome.polyline_drawn = true;

    let summary = plan.describe();
    for (role, location) in [(START_ROLE, &plan.start), (DESTINATION_ROLE, &plan.destination)] {
        let info = MarkerInfo::for_endpoint(role, location, Some(summary.clone()));
        let marker = MarkerOptions::new(location.position, location.name.clone())
            .snippet(Some(role.to_string()));
        registry.add(map, MarkerGroup::Directions, marker, info);
        outcome.endpoint_markers += 1;
    }

    for via in &plan.via_pois {
        let location_type = LocationType::parse(&via.raw_type);
        let info = MarkerInfo::for_via(via, location_type);
        let mut marker = MarkerOptions::new(via.position, via.name.clone()).snippet(info.subtitle.clone());
        match location_type {
            Some(location_type) => marker = marker.icon(icons.icon_for(location_type)),
            None => {
                log::debug!("Unbekannter POI-Typ '{}' bei '{}', Standard-Pin", via.raw_type, via.name);
                outcome.unresolved_vias += 1;
            }
        }
        registry.add(map, MarkerGroup::Directions, marker, info);
        outcome.via_markers += 1;
    }

    outcome.camera_fitted = fit_camera(map, plan, options.route_bounds_padding_px);
    log::debug!(
        "Route gezeichnet: {} Punkte, {} Zwischenhalte",
        plan.route.points.len(),
        outcome.via_markers
    );
    outcome
}

/// Passt die Kamera auf Route, Endpunkte und Zwischenhalte ein.
/// Fehler werden geschluckt: das Overlay bleibt auch ohne Kamerafahrt sichtbar.
fn fit_camera(map: &mut dyn MapSurface, plan: &DirectionPlan, padding_px: u32) -> bool {
    let Some(bounds) = GeoBounds::from_points(plan.camera_points()) else {
        return false;
    };
    match map.animate_camera(CameraUpdate::FitBounds { bounds, padding_px }) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Kamera konnte Route nicht einpassen: {}", e);
            false
        }
    }
}
