//! Zentrale Konfiguration des Karten-Overlays.
//!
//! `OverlayOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::MapLayer;

// ── Kamera-Follow ───────────────────────────────────────────────────

/// Unterhalb dieses Zooms springt die Follow-Kamera auf den Standard-Zoom.
pub const FOLLOW_MIN_ZOOM: f64 = 15.0;
/// Zoom, auf den beim Folgen gesprungen wird.
pub const FOLLOW_DEFAULT_ZOOM: f64 = 16.0;
/// Kameraneigung im Navigationsmodus (Grad).
pub const NAVIGATION_TILT: f64 = 45.0;

// ── Route ───────────────────────────────────────────────────────────

/// Innenabstand beim Einpassen der Route (Pixel).
pub const ROUTE_BOUNDS_PADDING_PX: u32 = 120;
/// Linienfarbe der Route (RGBA: Blau).
pub const ROUTE_COLOR: [u8; 4] = [33, 150, 243, 255];
/// Linienbreite der Route in Pixeln.
pub const ROUTE_WIDTH_PX: f32 = 8.0;

// ── Icons ───────────────────────────────────────────────────────────

/// Durchmesser der Wetter-Badges in Pixeln.
pub const WEATHER_BADGE_SIZE: u32 = 56;
/// Durchmesser der AQI-Badges in Pixeln.
pub const AQI_BADGE_SIZE: u32 = 48;
/// Durchmesser der POI-Badges in Pixeln.
pub const POI_BADGE_SIZE: u32 = 44;

/// Laufzeit-Optionen des Overlays (als TOML speicherbar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayOptions {
    // ── Kamera-Follow ───────────────────────────────────────────
    /// Zoom-Untergrenze beim Folgen
    pub follow_min_zoom: f64,
    /// Sprung-Zoom, wenn die Untergrenze unterschritten ist
    pub follow_default_zoom: f64,
    /// Neigung im Navigationsmodus
    pub navigation_tilt: f64,

    // ── Route ───────────────────────────────────────────────────
    pub route_bounds_padding_px: u32,
    pub route_color: [u8; 4],
    pub route_width_px: f32,

    // ── Icons ───────────────────────────────────────────────────
    pub weather_badge_size: u32,
    pub aqi_badge_size: u32,
    pub poi_badge_size: u32,

    // ── Layer ───────────────────────────────────────────────────
    /// Beim Start aktive Layer
    #[serde(default = "default_initial_layers")]
    pub initial_layers: Vec<MapLayer>,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            follow_min_zoom: FOLLOW_MIN_ZOOM,
            follow_default_zoom: FOLLOW_DEFAULT_ZOOM,
            navigation_tilt: NAVIGATION_TILT,

            route_bounds_padding_px: ROUTE_BOUNDS_PADDING_PX,
            route_color: ROUTE_COLOR,
            route_width_px: ROUTE_WIDTH_PX,

            weather_badge_size: WEATHER_BADGE_SIZE,
            aqi_badge_size: AQI_BADGE_SIZE,
            poi_badge_size: POI_BADGE_SIZE,

            initial_layers: default_initial_layers(),
        }
    }
}

/// Serde-Default für `initial_layers` (ältere TOML-Dateien ohne Layer-Liste).
fn default_initial_layers() -> Vec<MapLayer> {
    MapLayer::ALL.to_vec()
}

impl OverlayOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("airmap-overlay"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("airmap_overlay.toml")
    }

    /// Zoom, den die Follow-Kamera bei aktuellem Zoom `current` anfährt.
    pub fn follow_zoom(&self, current: f64) -> f64 {
        if current < self.follow_min_zoom {
            self.follow_default_zoom
        } else {
            current
        }
    }
}
