//! Geografische Grundtypen: Punkt und Bounding-Box in WGS84-Grad.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Position in WGS84 (Grad).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad (-90..90)
    pub lat: f64,
    /// Längengrad (-180..180)
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Großkreis-Distanz in Metern (Haversine).
    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlon = (other.lon - self.lon).to_radians();
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
    }

    /// Einheitsvektor auf der Kugel (für den Spatial-Index).
    pub fn to_unit_vector(&self) -> DVec3 {
        let (lat, lon) = (self.lat.to_radians(), self.lon.to_radians());
        DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }
}

/// Achsparallele Bounding-Box in Grad (ohne Datumsgrenzen-Behandlung).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Box um einen einzelnen Punkt (Breite und Höhe 0).
    pub fn around(point: GeoPoint) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Berechnet die Box über alle Punkte. `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::around(iter.next()?);
        for point in iter {
            bounds.include(point);
        }
        Some(bounds)
    }

    /// Erweitert die Box um einen Punkt.
    pub fn include(&mut self, point: GeoPoint) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lon = self.south_west.lon.min(point.lon);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lon = self.north_east.lon.max(point.lon);
    }

    /// Breite in Grad Länge.
    pub fn width_deg(&self) -> f64 {
        self.north_east.lon - self.south_west.lon
    }

    /// Höhe in Grad Breite.
    pub fn height_deg(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    /// `true`, wenn die Box zu einem Punkt zusammenfällt.
    pub fn is_degenerate(&self) -> bool {
        self.width_deg() <= f64::EPSILON && self.height_deg() <= f64::EPSILON
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lon + self.north_east.lon) / 2.0,
        )
    }

    /// Prüft, ob ein Punkt in der Box liegt (Ränder inklusive).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lon..=self.north_east.lon).contains(&point.lon)
    }
}
