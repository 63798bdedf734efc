//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und `render` gemeinsam lesen.

pub mod options;

pub use options::OverlayOptions;
pub use options::{FOLLOW_DEFAULT_ZOOM, FOLLOW_MIN_ZOOM, NAVIGATION_TILT};
