//! Karte im Speicher: Referenz-Implementierung von `MapSurface`.
//!
//! Wird von der Demo-Binary und den Tests genutzt. Handles werden
//! fortlaufend vergeben, Kamerabewegungen sofort übernommen und protokolliert.

use glam::DVec2;
use indexmap::IndexMap;

use super::surface::{
    CameraPosition, CameraUpdate, MapError, MapSurface, MarkerHandle, MarkerOptions,
    PolylineHandle, PolylineOptions,
};
use crate::core::{GeoBounds, GeoPoint};

/// Kachelgröße der Web-Mercator-Projektion in Pixeln.
const TILE_SIZE: f64 = 256.0;

/// In-Memory-Karte mit Viewport, Markern, Polylines und Kamera.
#[derive(Debug, Clone)]
pub struct InMemoryMap {
    viewport: [u32; 2],
    max_zoom: f64,
    next_id: u64,
    markers: IndexMap<MarkerHandle, MarkerOptions>,
    polylines: IndexMap<PolylineHandle, PolylineOptions>,
    camera: CameraPosition,
    animations: Vec<CameraUpdate>,
}

impl InMemoryMap {
    /// Maximaler Zoom gängiger Kartenstile.
    pub const DEFAULT_MAX_ZOOM: f64 = 21.0;

    /// Erstellt eine leere Karte mit gegebener Viewport-Größe in Pixeln.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: [width, height],
            max_zoom: Self::DEFAULT_MAX_ZOOM,
            next_id: 1,
            markers: IndexMap::new(),
            polylines: IndexMap::new(),
            camera: CameraPosition::default(),
            animations: Vec::new(),
        }
    }

    /// Setzt die Kamera ohne Animation (z.B. nach Nutzer-Geste).
    pub fn set_camera(&mut self, camera: CameraPosition) {
        self.camera = camera;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = [width, height];
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    pub fn marker(&self, handle: MarkerHandle) -> Option<&MarkerOptions> {
        self.markers.get(&handle)
    }

    /// Alle Marker in Einfügereihenfolge.
    pub fn markers(&self) -> impl Iterator<Item = (&MarkerHandle, &MarkerOptions)> {
        self.markers.iter()
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&PolylineHandle, &PolylineOptions)> {
        self.polylines.iter()
    }

    /// Alle erfolgreich ausgeführten Kamerabewegungen.
    pub fn animations(&self) -> &[CameraUpdate] {
        &self.animations
    }

    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Berechnet Mittelpunkt und Zoom, mit denen `bounds` abzüglich
    /// `padding_px` in den Viewport passt.
    fn fit(&self, bounds: &GeoBounds, padding_px: u32) -> Result<CameraPosition, MapError> {
        let [width, height] = self.viewport;
        if width == 0 || height == 0 {
            return Err(MapError::ViewportNotLaidOut { width, height });
        }
        if bounds.is_degenerate() {
            return Err(MapError::DegenerateBounds);
        }
        let usable = DVec2::new(
            width as f64 - 2.0 * padding_px as f64,
            height as f64 - 2.0 * padding_px as f64,
        );
        if usable.x <= 0.0 || usable.y <= 0.0 {
            return Err(MapError::PaddingTooLarge { padding_px });
        }

        let sw = project(&bounds.south_west);
        let ne = project(&bounds.north_east);
        let extent = (ne - sw).abs();
        let zoom_for = |pixels: f64, fraction: f64| {
            if fraction <= f64::EPSILON {
                f64::INFINITY
            } else {
                (pixels / (fraction * TILE_SIZE)).log2()
            }
        };
        let zoom = zoom_for(usable.x, extent.x)
            .min(zoom_for(usable.y, extent.y))
            .clamp(0.0, self.max_zoom);

        Ok(CameraPosition {
            target: unproject((sw + ne) / 2.0),
            zoom,
            ..self.camera
        })
    }
}

impl MapSurface for InMemoryMap {
    fn add_marker(&mut self, options: MarkerOptions) -> MarkerHandle {
        let handle = MarkerHandle(self.allocate());
        self.markers.insert(handle, options);
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        if self.markers.shift_remove(&handle).is_none() {
            log::debug!("{} war nicht (mehr) auf der Karte", handle);
        }
    }

    fn add_polyline(&mut self, options: PolylineOptions) -> PolylineHandle {
        let handle = PolylineHandle(self.allocate());
        self.polylines.insert(handle, options);
        handle
    }

    fn remove_polyline(&mut self, handle: PolylineHandle) {
        if self.polylines.shift_remove(&handle).is_none() {
            log::debug!("{} war nicht (mehr) auf der Karte", handle);
        }
    }

    fn camera_position(&self) -> CameraPosition {
        self.camera
    }

    fn animate_camera(&mut self, update: CameraUpdate) -> Result<(), MapError> {
        let target = match update {
            CameraUpdate::MoveTo(position) => CameraPosition {
                zoom: position.zoom.clamp(0.0, self.max_zoom),
                ..position
            },
            CameraUpdate::FitBounds { bounds, padding_px } => self.fit(&bounds, padding_px)?,
        };
        self.camera = target;
        self.animations.push(update);
        Ok(())
    }
}

/// Web-Mercator: Grad → Weltkoordinaten 0..1 (y wächst nach Süden).
fn project(point: &GeoPoint) -> DVec2 {
    let lat = point.lat.clamp(-85.051_128_78, 85.051_128_78).to_radians();
    DVec2::new(
        (point.lon + 180.0) / 360.0,
        (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0,
    )
}

fn unproject(world: DVec2) -> GeoPoint {
    let n = std::f64::consts::PI * (1.0 - 2.0 * world.y);
    GeoPoint::new(n.sinh().atan().to_degrees(), world.x * 360.0 - 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_handles_are_unique_across_kinds() {
        let mut map = InMemoryMap::new(800, 600);
        let m = map.add_marker(MarkerOptions::new(GeoPoint::default(), "a"));
        let p = map.add_polyline(PolylineOptions {
            points: vec![GeoPoint::default(), GeoPoint::new(1.0, 1.0)],
            color: [0, 0, 255, 255],
            width_px: 4.0,
        });
        assert_ne!(m.0, p.0);
        assert_eq!(map.marker_count(), 1);
        assert_eq!(map.polyline_count(), 1);

        map.remove_marker(m);
        map.remove_marker(m);
        map.remove_polyline(p);
        assert_eq!(map.marker_count(), 0);
        assert_eq!(map.polyline_count(), 0);
    }

    #[test]
    fn test_project_roundtrip() {
        let point = GeoPoint::new(21.0285, 105.8542);
        let back = unproject(project(&point));
        assert_relative_eq!(back.lat, point.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lon, point.lon, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_bounds_centers_and_zooms() {
        let mut map = InMemoryMap::new(1080, 1920);
        let bounds = GeoBounds::from_points([GeoPoint::new(21.0, 105.8), GeoPoint::new(21.05, 105.85)])
            .expect("zwei Punkte");
        map.animate_camera(CameraUpdate::FitBounds {
            bounds,
            padding_px: 100,
        })
        .expect("Box hat Fläche");
        let camera = map.camera_position();
        assert_relative_eq!(camera.target.lon, 105.825, epsilon = 1e-6);
        assert!((camera.target.lat - 21.025).abs() < 1e-3);
        // 0.05° bei 880 px nutzbarer Breite → etwa Zoom 14
        assert!(camera.zoom > 13.0 && camera.zoom < 15.0, "zoom={}", camera.zoom);
    }

    #[test]
    fn test_fit_bounds_rejects_single_point_and_missing_layout() {
        let mut map = InMemoryMap::new(800, 600);
        let point = GeoBounds::around(GeoPoint::new(21.0, 105.8));
        assert_eq!(
            map.animate_camera(CameraUpdate::FitBounds {
                bounds: point,
                padding_px: 10
            }),
            Err(MapError::DegenerateBounds)
        );

        map.set_viewport(0, 0);
        let area = GeoBounds::from_points([GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)])
            .expect("zwei Punkte");
        assert_eq!(
            map.animate_camera(CameraUpdate::FitBounds {
                bounds: area,
                padding_px: 10
            }),
            Err(MapError::ViewportNotLaidOut { width: 0, height: 0 })
        );
        assert!(map.animations().is_empty());
    }

    #[test]
    fn test_move_to_clamps_zoom() {
        let mut map = InMemoryMap::new(800, 600);
        map.animate_camera(CameraUpdate::MoveTo(CameraPosition {
            zoom: 40.0,
            ..CameraPosition::default()
        }))
        .expect("MoveTo schlägt nicht fehl");
        assert_relative_eq!(map.camera_position().zoom, InMemoryMap::DEFAULT_MAX_ZOOM);
        assert_eq!(map.animations().len(), 1);
    }
}
