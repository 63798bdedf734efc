//! Overlay Controller für zentrale Event-Verarbeitung.

use super::{effects, OverlayCommand, OverlayIntent, OverlayState};
use crate::map::MapSurface;
use crate::render::IconFactories;

/// Orchestriert Intents, Commands und Effekte auf den `OverlayState`.
///
/// Besitzt die Icon-Factories; sie werden einmal erzeugt und bei
/// geänderten Badge-Größen neu aufgebaut.
#[derive(Debug, Default)]
pub struct OverlayController {
    icons: IconFactories,
}

impl OverlayController {
    pub fn new(state: &OverlayState) -> Self {
        Self {
            icons: IconFactories::new(&state.options),
        }
    }

    pub fn icons(&self) -> &IconFactories {
        &self.icons
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping und führt danach
    /// alle ausstehenden Effekte gegen die Karte aus (sofern vorhanden und bereit).
    pub fn handle_intent(
        &mut self,
        state: &mut OverlayState,
        mut map: Option<&mut dyn MapSurface>,
        intent: OverlayIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            // Bereit-Signal auf bereits bereiter Karte: Gezeichnetes dort abbauen
            let reattach = matches!(command, OverlayCommand::AttachMap) && state.map.ready;
            if reattach {
                if let Some(surface) = map.as_mut() {
                    state.command_log.record(&command);
                    super::handlers::map_lifecycle::reattach(state, &mut **surface);
                    continue;
                }
            }
            self.handle_command(state, command)?;
        }

        let pending = effects::schedule(state);
        if pending == 0 {
            return Ok(());
        }
        match map {
            Some(map) => {
                effects::flush(state, &mut self.icons, map)?;
            }
            None => log::debug!("{} Effekt(e) warten auf die Karte", pending),
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem `OverlayState` aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut OverlayState,
        command: OverlayCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Karte ===
            OverlayCommand::AttachMap => handlers::map_lifecycle::attach(state),
            OverlayCommand::DetachMap => handlers::map_lifecycle::detach(state),

            // === Daten ===
            OverlayCommand::SetWeatherStations { stations } => {
                handlers::data::set_weather_stations(state, stations)
            }
            OverlayCommand::SetAqiStations { stations } => {
                handlers::data::set_aqi_stations(state, stations)
            }
            OverlayCommand::SetPois { pois } => handlers::data::set_pois(state, pois),
            OverlayCommand::SetDirectionPlan { plan } => {
                handlers::data::set_direction_plan(state, plan)
            }

            // === Layer ===
            OverlayCommand::SetLayerActive { layer, active } => {
                handlers::layers::set_layer_active(state, layer, active)
            }
            OverlayCommand::SetActiveLayers { layers } => {
                handlers::layers::set_active_layers(state, layers)
            }

            // === Follow-Kamera ===
            OverlayCommand::SetLocation { location, bearing } => {
                handlers::follow::set_location(state, location, bearing)
            }
            OverlayCommand::SetFollowEnabled { enabled } => {
                handlers::follow::set_enabled(state, enabled)
            }
            OverlayCommand::SetNavigationMode { enabled } => {
                handlers::follow::set_navigation_mode(state, enabled)
            }
            OverlayCommand::SetLocationPermission { granted } => {
                handlers::follow::set_permission(state, granted)
            }

            // === Optionen ===
            OverlayCommand::ApplyOptions { options } => {
                if handlers::options::apply(state, options) {
                    self.icons = IconFactories::new(&state.options);
                }
            }
        }

        Ok(())
    }
}
