//! Feature-Handler für OverlayCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod data;
pub mod follow;
pub mod layers;
pub mod map_lifecycle;
pub mod options;
