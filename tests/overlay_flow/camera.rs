use airmap_overlay::map::CameraPosition;
use airmap_overlay::{GeoPoint, MapSurface, OverlayIntent};
use approx::assert_relative_eq;

use super::Harness;

fn following(zoom: f64) -> Harness {
    let mut h = Harness::ready();
    h.map.set_camera(CameraPosition {
        zoom,
        ..CameraPosition::default()
    });
    h.send(OverlayIntent::LocationPermissionChanged { granted: true });
    h.send(OverlayIntent::FollowToggled { enabled: true });
    h
}

#[test]
fn test_follow_snaps_low_zoom() {
    let mut h = following(10.0);

    h.send(OverlayIntent::LocationUpdated {
        location: GeoPoint::new(21.0285, 105.8542),
        bearing: None,
    });

    let camera = h.map.camera_position();
    assert_relative_eq!(camera.zoom, 16.0);
    assert_eq!(camera.target, GeoPoint::new(21.0285, 105.8542));
}

#[test]
fn test_follow_keeps_high_zoom() {
    let mut h = following(17.0);

    h.send(OverlayIntent::LocationUpdated {
        location: GeoPoint::new(21.0285, 105.8542),
        bearing: Some(45.0),
    });

    let camera = h.map.camera_position();
    assert_relative_eq!(camera.zoom, 17.0);
    assert_relative_eq!(camera.bearing, 45.0);
}

#[test]
fn test_navigation_mode_tilts_camera() {
    let mut h = following(17.0);
    h.send(OverlayIntent::LocationUpdated {
        location: GeoPoint::new(21.0285, 105.8542),
        bearing: None,
    });

    h.send(OverlayIntent::NavigationModeChanged { enabled: true });

    assert_relative_eq!(h.map.camera_position().tilt, 45.0);
}

#[test]
fn test_no_follow_without_permission() {
    let mut h = Harness::ready();
    h.send(OverlayIntent::FollowToggled { enabled: true });

    h.send(OverlayIntent::LocationUpdated {
        location: GeoPoint::new(21.0285, 105.8542),
        bearing: None,
    });

    assert!(h.map.animations().is_empty());

    h.send(OverlayIntent::LocationPermissionChanged { granted: true });
    assert_eq!(h.map.animations().len(), 1);
}

#[test]
fn test_repeated_identical_location_is_suppressed() {
    let mut h = following(17.0);
    let update = OverlayIntent::LocationUpdated {
        location: GeoPoint::new(21.0285, 105.8542),
        bearing: Some(10.0),
    };

    h.send(update.clone());
    h.send(update);

    assert_eq!(h.map.animations().len(), 1);
}
