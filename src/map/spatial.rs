//! Spatial-Index (KD-Tree) über der Marker-Detailtabelle.
//!
//! Löst Taps auf, die keinen Marker exakt treffen: nächster Marker oder
//! alle Marker innerhalb eines Radius in Metern.

use kiddo::{KdTree, SquaredEuclidean};

use super::registry::MarkerInfoTable;
use super::surface::MarkerHandle;
use crate::core::geo::EARTH_RADIUS_M;
use crate::core::GeoPoint;

/// Treffer einer Distanzabfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerMatch {
    pub handle: MarkerHandle,
    /// Großkreis-Distanz in Metern
    pub distance_m: f64,
}

/// Read-only Index über Einheitsvektoren der Marker-Positionen.
#[derive(Debug, Clone)]
pub struct MarkerSpatialIndex {
    tree: KdTree<f64, 3>,
    handles: Vec<MarkerHandle>,
}

impl MarkerSpatialIndex {
    /// Baut den Index aus der aktuellen Detailtabelle.
    pub fn from_infos(infos: &MarkerInfoTable) -> Self {
        let mut handles = Vec::with_capacity(infos.len());
        let mut entries = Vec::with_capacity(infos.len());
        for (handle, info) in infos.iter() {
            handles.push(*handle);
            entries.push(info.position().to_unit_vector().to_array());
        }
        let tree: KdTree<f64, 3> = (&entries).into();
        Self { tree, handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Nächster Marker zur Position.
    pub fn nearest(&self, point: GeoPoint) -> Option<MarkerMatch> {
        if self.is_empty() {
            return None;
        }
        let query = point.to_unit_vector().to_array();
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        let handle = *self.handles.get(result.item as usize)?;
        Some(MarkerMatch {
            handle,
            distance_m: chord_sq_to_meters(result.distance),
        })
    }

    /// Alle Marker innerhalb von `radius_m`, aufsteigend nach Distanz.
    pub fn within_radius(&self, point: GeoPoint, radius_m: f64) -> Vec<MarkerMatch> {
        if self.is_empty() || radius_m.is_sign_negative() {
            return Vec::new();
        }
        let query = point.to_unit_vector().to_array();
        let chord = meters_to_chord(radius_m);
        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&query, chord * chord)
            .into_iter()
            .filter_map(|entry| {
                let handle = *self.handles.get(entry.item as usize)?;
                Some(MarkerMatch {
                    handle,
                    distance_m: chord_sq_to_meters(entry.distance),
                })
            })
            .collect::<Vec<_>>();
        results.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
        results
    }
}

/// Sehnenlänge auf der Einheitskugel für eine Bogenlänge in Metern.
fn meters_to_chord(meters: f64) -> f64 {
    let angle = (meters / EARTH_RADIUS_M).min(std::f64::consts::PI);
    2.0 * (angle / 2.0).sin()
}

fn chord_sq_to_meters(chord_sq: f64) -> f64 {
    let chord = chord_sq.max(0.0).sqrt();
    2.0 * (chord / 2.0).min(1.0).asin() * EARTH_RADIUS_M
}
