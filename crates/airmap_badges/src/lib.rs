//! `airmap_badges`: kleine Raster-Badges für Karten-Marker.
//!
//! Zeichnet runde Marker-Icons als RGBA-Bilder:
//! - Verlaufsfüllung mit Ring
//! - Zahlen- oder Kürzel-Label, automatisch in die Badge eingepasst
//! - Wetter-Piktogramme (Sonne, Wolke, Regen, Gewitter, Nebel, Schnee)
//! - Optionaler Text-Chip unterhalb der Badge
//!
//! # Beispiel
//! ```
//! use airmap_badges::{render_badge, BadgeContent, BadgeStyle};
//!
//! let style = BadgeStyle::new(48, [0, 228, 0, 255]);
//! let icon = render_badge(&style, BadgeContent::Label("42"), None);
//! assert_eq!(icon.dimensions(), (48, 48));
//! ```

pub mod badge;
pub mod palette;
pub mod pictogram;
pub mod shapes;
pub mod text;

pub use badge::{BadgeContent, BadgeStyle, Chip, render_badge};
pub use palette::Rgba;
pub use pictogram::Pictogram;
