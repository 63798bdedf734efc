//! Memo-Cache für gerasterte Marker-Icons.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use image::RgbaImage;

use crate::map::MarkerIcon;

/// Cache von semantischem Schlüssel auf fertig gerastertes Icon.
///
/// Ohne Eviction: der Schlüsselraum (Zustand × Temperatur, Index × Kategorie,
/// POI-Typ) ist klein und endlich.
#[derive(Debug, Clone)]
pub struct IconCache<K> {
    icons: HashMap<K, MarkerIcon>,
}

impl<K> Default for IconCache<K> {
    fn default() -> Self {
        Self {
            icons: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> IconCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert das Icon zum Schlüssel; rendert nur beim ersten Zugriff.
    pub fn get_or_render(&mut self, key: K, render: impl FnOnce() -> RgbaImage) -> MarkerIcon {
        Arc::clone(
            self.icons
                .entry(key)
                .or_insert_with(|| Arc::new(render())),
        )
    }

    pub fn get(&self, key: &K) -> Option<&MarkerIcon> {
        self.icons.get(key)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &MarkerIcon)> {
        self.icons.iter()
    }
}
