use airmap_overlay::map::MarkerGroup;
use airmap_overlay::{MapSurface, OverlayIntent};

use super::{plan, Harness};

#[test]
fn test_plan_draws_overlay_and_fits_camera() {
    let mut h = Harness::ready();
    let zoom_before = h.map.camera_position().zoom;

    h.send(OverlayIntent::DirectionPlanChanged { plan: Some(plan()) });

    assert_eq!(h.map.polyline_count(), 1);
    assert_eq!(h.state.registry.group_len(MarkerGroup::Directions), 4);
    assert_eq!(h.state.registry.infos().count_category("Directions"), 2);
    assert_eq!(h.state.registry.infos().count_category("Via"), 2);
    assert!(h.map.camera_position().zoom > zoom_before);
}

#[test]
fn test_null_plan_clears_everything() {
    let mut h = Harness::ready();
    h.send(OverlayIntent::DirectionPlanChanged { plan: Some(plan()) });

    h.send(OverlayIntent::DirectionPlanChanged { plan: None });

    assert_eq!(h.map.polyline_count(), 0);
    assert_eq!(h.map.marker_count(), 0);
    assert!(h.state.registry.infos().is_empty());
    assert!(h.state.route.polyline().is_none());
}

#[test]
fn test_same_plan_is_not_redrawn() {
    let mut h = Harness::ready();
    h.send(OverlayIntent::DirectionPlanChanged { plan: Some(plan()) });
    let animations = h.map.animations().len();

    h.send(OverlayIntent::DirectionPlanChanged { plan: Some(plan()) });

    assert_eq!(h.map.animations().len(), animations);
    assert_eq!(h.map.polyline_count(), 1);
}

#[test]
fn test_repeated_map_ready_redraws_route_once() {
    let mut h = Harness::ready();
    h.send(OverlayIntent::DirectionPlanChanged { plan: Some(plan()) });

    h.send(OverlayIntent::MapReady);

    assert_eq!(h.map.polyline_count(), 1);
    assert_eq!(h.map.marker_count(), 4);
    assert_eq!(h.state.registry.infos().len(), 4);
}
