//! Mapping von Kollaborateur-Intents auf mutierende Overlay-Commands.

use super::{OverlayCommand, OverlayIntent, OverlayState};
use crate::core::AqiStationMarker;

/// Übersetzt einen `OverlayIntent` in eine Sequenz ausführbarer `OverlayCommand`s.
pub fn map_intent_to_commands(state: &OverlayState, intent: OverlayIntent) -> Vec<OverlayCommand> {
    match intent {
        OverlayIntent::MapReady => vec![OverlayCommand::AttachMap],
        OverlayIntent::MapReleased => vec![OverlayCommand::DetachMap],
        OverlayIntent::WeatherStationsLoaded { stations } => {
            vec![OverlayCommand::SetWeatherStations { stations }]
        }
        OverlayIntent::AqiStationsLoaded { stations } => {
            vec![OverlayCommand::SetAqiStations { stations }]
        }
        OverlayIntent::AqiSamplesLoaded { samples } => {
            let stations = samples.iter().map(AqiStationMarker::from).collect();
            vec![OverlayCommand::SetAqiStations { stations }]
        }
        OverlayIntent::PoisLoaded { pois } => vec![OverlayCommand::SetPois { pois }],
        OverlayIntent::LayerToggled { layer } => vec![OverlayCommand::SetLayerActive {
            layer,
            active: !state.is_layer_active(layer),
        }],
        OverlayIntent::LayerVisibilitySet { layer, visible } => {
            vec![OverlayCommand::SetLayerActive {
                layer,
                active: visible,
            }]
        }
        OverlayIntent::ActiveLayersReplaced { layers } => {
            vec![OverlayCommand::SetActiveLayers { layers }]
        }
        OverlayIntent::DirectionPlanChanged { plan } => {
            vec![OverlayCommand::SetDirectionPlan { plan }]
        }
        OverlayIntent::LocationUpdated { location, bearing } => vec![OverlayCommand::SetLocation {
            location: Some(location),
            bearing,
        }],
        OverlayIntent::LocationLost => vec![OverlayCommand::SetLocation {
            location: None,
            bearing: None,
        }],
        OverlayIntent::FollowToggled { enabled } => {
            vec![OverlayCommand::SetFollowEnabled { enabled }]
        }
        OverlayIntent::NavigationModeChanged { enabled } => {
            // Navigationsmodus schaltet Follow mit ein
            let mut commands = vec![OverlayCommand::SetNavigationMode { enabled }];
            if enabled && !state.follow.enabled {
                commands.push(OverlayCommand::SetFollowEnabled { enabled: true });
            }
            commands
        }
        OverlayIntent::LocationPermissionChanged { granted } => {
            vec![OverlayCommand::SetLocationPermission { granted }]
        }
        OverlayIntent::OptionsChanged { options } => vec![OverlayCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests;
