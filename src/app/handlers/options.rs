//! Handler für Options-Änderungen.

use crate::app::OverlayState;
use crate::shared::OverlayOptions;

/// Übernimmt neue Optionen. Gibt `true` zurück, wenn sie sich unterscheiden.
pub fn apply(state: &mut OverlayState, options: OverlayOptions) -> bool {
    if state.options == options {
        return false;
    }
    state.options = options;
    state.options_revision += 1;
    log::info!("Optionen übernommen (Revision {})", state.options_revision);
    true
}
