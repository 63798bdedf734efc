use crate::app::{OverlayCommand, OverlayIntent, OverlayState};
use crate::core::{AqiCategory, AqiSample, GeoPoint, MapLayer};

use super::map_intent_to_commands;

#[test]
fn map_ready_maps_to_attach() {
    let state = OverlayState::new();

    let commands = map_intent_to_commands(&state, OverlayIntent::MapReady);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], OverlayCommand::AttachMap));
}

#[test]
fn layer_toggle_inverts_current_visibility() {
    let mut state = OverlayState::new();

    let commands = map_intent_to_commands(&state, OverlayIntent::LayerToggled { layer: MapLayer::Aqi });
    assert!(matches!(
        commands[0],
        OverlayCommand::SetLayerActive {
            layer: MapLayer::Aqi,
            active: false
        }
    ));

    state.active_layers.remove(&MapLayer::Aqi);
    let commands = map_intent_to_commands(&state, OverlayIntent::LayerToggled { layer: MapLayer::Aqi });
    assert!(matches!(
        commands[0],
        OverlayCommand::SetLayerActive {
            layer: MapLayer::Aqi,
            active: true
        }
    ));
}

#[test]
fn aqi_samples_are_converted_to_stations() {
    let state = OverlayState::new();
    let samples = vec![
        AqiSample {
            position: GeoPoint::new(21.0, 105.8),
            name: "Hang Dau".into(),
            pm25: Some(12.5),
        },
        AqiSample {
            position: GeoPoint::new(21.1, 105.8),
            name: "Offline".into(),
            pm25: None,
        },
    ];

    let commands = map_intent_to_commands(&state, OverlayIntent::AqiSamplesLoaded { samples });

    let OverlayCommand::SetAqiStations { stations } = &commands[0] else {
        panic!("SetAqiStations erwartet, erhalten: {:?}", commands[0]);
    };
    assert_eq!(stations[0].aqi, Some(25));
    assert_eq!(stations[0].category, Some(AqiCategory::Good));
    assert_eq!(stations[1].aqi, None);
}

#[test]
fn navigation_mode_enables_follow_when_off() {
    let state = OverlayState::new();

    let commands = map_intent_to_commands(&state, OverlayIntent::NavigationModeChanged { enabled: true });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], OverlayCommand::SetNavigationMode { enabled: true }));
    assert!(matches!(commands[1], OverlayCommand::SetFollowEnabled { enabled: true }));
}

#[test]
fn location_lost_clears_location() {
    let state = OverlayState::new();

    let commands = map_intent_to_commands(&state, OverlayIntent::LocationLost);

    assert!(matches!(
        commands[0],
        OverlayCommand::SetLocation {
            location: None,
            bearing: None
        }
    ));
}
