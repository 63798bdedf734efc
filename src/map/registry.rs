//! Buchführung über gezeichnete Marker.
//!
//! Das SDK besitzt die Marker; die Registry merkt sich nur deren Handles pro
//! Gruppe und die zugehörigen Detailinfos. Hinzufügen und Entfernen laufen
//! immer gemeinsam über Karte und Tabelle, damit keine verwaisten Einträge
//! entstehen.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::surface::{MapSurface, MarkerHandle, MarkerOptions};
use crate::core::{LocationType, MarkerInfo};

/// Gruppe, unter der Marker gemeinsam auf- und abgebaut werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkerGroup {
    Weather,
    Aqi,
    Poi(LocationType),
    /// Start, Ziel und Zwischenhalte der Route
    Directions,
}

/// Detailtabelle: Marker-Handle → Anzeigedaten, in Einfügereihenfolge.
#[derive(Debug, Clone, Default)]
pub struct MarkerInfoTable {
    entries: IndexMap<MarkerHandle, MarkerInfo>,
}

impl MarkerInfoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detailinfo für einen angetippten Marker.
    pub fn get(&self, handle: MarkerHandle) -> Option<&MarkerInfo> {
        self.entries.get(&handle)
    }

    pub fn contains(&self, handle: MarkerHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MarkerHandle, &MarkerInfo)> {
        self.entries.iter()
    }

    /// Anzahl der Einträge mit gegebener Kategorie.
    pub fn count_category(&self, category: &str) -> usize {
        self.entries.values().filter(|info| info.category == category).count()
    }

    fn insert(&mut self, handle: MarkerHandle, info: MarkerInfo) {
        self.entries.insert(handle, info);
    }

    fn remove(&mut self, handle: MarkerHandle) -> Option<MarkerInfo> {
        self.entries.shift_remove(&handle)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Handles pro Gruppe plus Detailtabelle.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    groups: HashMap<MarkerGroup, Vec<MarkerHandle>>,
    infos: MarkerInfoTable,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen Marker und trägt ihn in Gruppe und Detailtabelle ein.
    pub fn add(
        &mut self,
        map: &mut dyn MapSurface,
        group: MarkerGroup,
        options: MarkerOptions,
        info: MarkerInfo,
    ) -> MarkerHandle {
        let handle = map.add_marker(options);
        self.groups.entry(group).or_default().push(handle);
        self.infos.insert(handle, info);
        handle
    }

    /// Entfernt alle Marker einer Gruppe von der Karte und aus der Tabelle.
    /// Gibt die Anzahl entfernter Marker zurück.
    pub fn clear_group(&mut self, map: &mut dyn MapSurface, group: MarkerGroup) -> usize {
        let Some(handles) = self.groups.remove(&group) else {
            return 0;
        };
        for &handle in &handles {
            map.remove_marker(handle);
            self.infos.remove(handle);
        }
        handles.len()
    }

    /// Entfernt alle Gruppen von der Karte und aus der Tabelle.
    pub fn clear_all(&mut self, map: &mut dyn MapSurface) -> usize {
        let groups: Vec<MarkerGroup> = self.groups.keys().copied().collect();
        groups
            .into_iter()
            .map(|group| self.clear_group(map, group))
            .sum()
    }

    /// Vergisst alle Handles, ohne die Karte anzufassen.
    ///
    /// Für den Fall, dass die Karteninstanz ersetzt wurde: die alten
    /// Handles sind mit ihr ungültig geworden.
    pub fn forget_all(&mut self) {
        self.groups.clear();
        self.infos.clear();
    }

    /// Handles einer Gruppe (leer, wenn nichts gezeichnet ist).
    pub fn handles(&self, group: MarkerGroup) -> &[MarkerHandle] {
        self.groups.get(&group).map_or(&[], Vec::as_slice)
    }

    pub fn group_len(&self, group: MarkerGroup) -> usize {
        self.handles(group).len()
    }

    /// Gesamtzahl verwalteter Marker.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn infos(&self) -> &MarkerInfoTable {
        &self.infos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;
    use crate::map::InMemoryMap;

    fn info(title: &str, category: &str) -> MarkerInfo {
        MarkerInfo {
            title: title.to_string(),
            subtitle: None,
            description: None,
            category: category.to_string(),
            lat: 21.0,
            lon: 105.8,
        }
    }

    fn add(registry: &mut MarkerRegistry, map: &mut InMemoryMap, group: MarkerGroup, title: &str) -> MarkerHandle {
        registry.add(
            map,
            group,
            MarkerOptions::new(GeoPoint::new(21.0, 105.8), title),
            info(title, "Test"),
        )
    }

    #[test]
    fn test_add_records_handle_and_info() {
        let mut map = InMemoryMap::new(400, 400);
        let mut registry = MarkerRegistry::new();
        let handle = add(&mut registry, &mut map, MarkerGroup::Weather, "Lang");

        assert_eq!(registry.handles(MarkerGroup::Weather), &[handle]);
        assert_eq!(registry.infos().get(handle).map(|i| i.title.as_str()), Some("Lang"));
        assert_eq!(map.marker_count(), 1);
    }

    #[test]
    fn test_clear_group_only_touches_that_group() {
        let mut map = InMemoryMap::new(400, 400);
        let mut registry = MarkerRegistry::new();
        add(&mut registry, &mut map, MarkerGroup::Poi(LocationType::PublicPark), "Park 1");
        add(&mut registry, &mut map, MarkerGroup::Poi(LocationType::PublicPark), "Park 2");
        let ev = add(&mut registry, &mut map, MarkerGroup::Poi(LocationType::ChargingStation), "EV");

        let removed = registry.clear_group(&mut map, MarkerGroup::Poi(LocationType::PublicPark));

        assert_eq!(removed, 2);
        assert_eq!(map.marker_count(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.infos().len(), 1);
        assert!(registry.infos().contains(ev));
        assert_eq!(registry.clear_group(&mut map, MarkerGroup::Aqi), 0);
    }

    #[test]
    fn test_clear_all_removes_every_group() {
        let mut map = InMemoryMap::new(400, 400);
        let mut registry = MarkerRegistry::new();
        add(&mut registry, &mut map, MarkerGroup::Weather, "Lang");
        add(&mut registry, &mut map, MarkerGroup::Poi(LocationType::PublicPark), "Park");
        add(&mut registry, &mut map, MarkerGroup::Directions, "Start");

        assert_eq!(registry.clear_all(&mut map), 3);
        assert_eq!(map.marker_count(), 0);
        assert!(registry.is_empty());
        assert!(registry.infos().is_empty());
    }

    #[test]
    fn test_forget_all_leaves_map_untouched() {
        let mut map = InMemoryMap::new(400, 400);
        let mut registry = MarkerRegistry::new();
        add(&mut registry, &mut map, MarkerGroup::Aqi, "A");

        registry.forget_all();

        assert!(registry.is_empty());
        assert!(registry.infos().is_empty());
        assert_eq!(map.marker_count(), 1);
    }
}
