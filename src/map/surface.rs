//! Schnittstelle zum Karten-SDK.
//!
//! Das SDK besitzt Marker und Polylines; dieser Crate hält nur Handles
//! und ruft `add_*` / `remove_*` auf.

use std::fmt;
use std::sync::Arc;

use image::RgbaImage;
use thiserror::Error;

use crate::core::{GeoBounds, GeoPoint};

/// Gerastertes Marker-Icon, zwischen Cache und SDK geteilt.
pub type MarkerIcon = Arc<RgbaImage>;

/// Handle eines vom SDK gezeichneten Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u64);

/// Handle einer vom SDK gezeichneten Polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolylineHandle(pub u64);

impl fmt::Display for MarkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

impl fmt::Display for PolylineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polyline#{}", self.0)
    }
}

/// Parameter für einen neuen Marker.
#[derive(Debug, Clone)]
pub struct MarkerOptions {
    pub position: GeoPoint,
    pub title: String,
    pub snippet: Option<String>,
    /// `None` = Standard-Pin des SDK
    pub icon: Option<MarkerIcon>,
}

impl MarkerOptions {
    pub fn new(position: GeoPoint, title: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
            snippet: None,
            icon: None,
        }
    }

    pub fn snippet(mut self, snippet: Option<String>) -> Self {
        self.snippet = snippet;
        self
    }

    pub fn icon(mut self, icon: MarkerIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Parameter für eine neue Polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineOptions {
    pub points: Vec<GeoPoint>,
    /// RGBA
    pub color: [u8; 4],
    pub width_px: f32,
}

/// Kamera-Zustand der Karte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPosition {
    pub target: GeoPoint,
    pub zoom: f64,
    /// Grad, im Uhrzeigersinn ab Norden
    pub bearing: f64,
    /// Grad, 0 = Draufsicht
    pub tilt: f64,
}

impl Default for CameraPosition {
    fn default() -> Self {
        Self {
            target: GeoPoint::default(),
            zoom: 2.0,
            bearing: 0.0,
            tilt: 0.0,
        }
    }
}

/// Animierte Kamerabewegung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraUpdate {
    /// Zu einer festen Kameraposition fahren
    MoveTo(CameraPosition),
    /// Box mit Innenabstand in den Viewport einpassen
    FitBounds { bounds: GeoBounds, padding_px: u32 },
}

/// Fehler des Karten-SDK.
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("Bounding-Box ohne Fläche kann nicht eingepasst werden")]
    DegenerateBounds,
    #[error("Viewport noch nicht vermessen ({width}x{height})")]
    ViewportNotLaidOut { width: u32, height: u32 },
    #[error("Innenabstand {padding_px}px ist größer als der Viewport")]
    PaddingTooLarge { padding_px: u32 },
}

/// Mutierbare Karte, wie sie das SDK nach "Style geladen" bereitstellt.
///
/// Nur die Overlay-Logik dieses Crates darf Marker und Polylines anlegen oder
/// entfernen, sonst läuft die Detail-Tabelle auseinander.
pub trait MapSurface {
    /// Zeichnet einen Marker und liefert sein Handle.
    fn add_marker(&mut self, options: MarkerOptions) -> MarkerHandle;
    /// Entfernt einen Marker; unbekannte Handles werden ignoriert.
    fn remove_marker(&mut self, handle: MarkerHandle);
    /// Zeichnet eine Polyline und liefert ihr Handle.
    fn add_polyline(&mut self, options: PolylineOptions) -> PolylineHandle;
    /// Entfernt eine Polyline; unbekannte Handles werden ignoriert.
    fn remove_polyline(&mut self, handle: PolylineHandle);
    /// Aktuelle Kameraposition.
    fn camera_position(&self) -> CameraPosition;
    /// Startet eine animierte Kamerabewegung.
    fn animate_camera(&mut self, update: CameraUpdate) -> Result<(), MapError>;
}
