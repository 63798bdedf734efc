//! Application-Layer: Controller, State, Events, Effekte und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod effect_slot;
pub mod effects;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Overlay State
///
/// Dieses Modul verwaltet Eingabedaten, Layer-Auswahl, Follow-Eingaben und
/// die Buchführung über gezeichnete Marker.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::OverlayController;
pub use effect_slot::{EffectSlot, EffectTicket};
pub use effects::{DirectionKey, EffectSlots, FollowKey, LayerKey};
pub use events::{OverlayCommand, OverlayIntent};
pub use intent_mapping::map_intent_to_commands;
pub use state::{DataRevisions, FollowState, MapLifecycle, OverlayData, OverlayState};
pub use use_cases::direction_overlay::{DirectionOverlayOutcome, RouteOverlay};
pub use use_cases::layer_sync::LayerSyncOutcome;
