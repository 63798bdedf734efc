//! Routenplan für das Richtungs-Overlay.

use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;

/// Start- oder Zielort eines Plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanLocation {
    pub name: String,
    pub position: GeoPoint,
}

impl PlanLocation {
    pub fn new(name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Zwischenhalt an einem POI. Der Typ kommt als Rohstring aus der API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViaPoi {
    pub name: String,
    pub position: GeoPoint,
    pub raw_type: String,
}

impl ViaPoi {
    pub fn new(name: impl Into<String>, position: GeoPoint, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position,
            raw_type: raw_type.into(),
        }
    }
}

/// Berechnete Routengeometrie.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DirectionRoute {
    /// Geordnete Punkte der Polyline
    pub points: Vec<GeoPoint>,
    /// Länge in Metern
    pub distance_m: f64,
    /// Dauer in Sekunden
    pub duration_s: f64,
}

impl DirectionRoute {
    /// Eine Route ist zeichenbar, wenn sie mindestens zwei Punkte hat.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Vollständiger Plan: Start, Ziel, Zwischenhalte und Route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionPlan {
    pub start: PlanLocation,
    pub destination: PlanLocation,
    pub via_pois: Vec<ViaPoi>,
    pub route: DirectionRoute,
    pub summary: Option<String>,
}

impl DirectionPlan {
    /// Alle Punkte, die beim Einpassen der Kamera berücksichtigt werden.
    pub fn camera_points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.route
            .points
            .iter()
            .copied()
            .chain([self.start.position, self.destination.position])
            .chain(self.via_pois.iter().map(|via| via.position))
    }

    /// Kurze Zusammenfassung für die Detailansicht.
    pub fn describe(&self) -> String {
        match &self.summary {
            Some(summary) => summary.clone(),
            None => format!(
                "{:.1} km · {} min",
                self.route.distance_m / 1000.0,
                (self.route.duration_s / 60.0).round() as i64
            ),
        }
    }
}
