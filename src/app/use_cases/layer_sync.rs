//! Layer-Abgleich: Marker eines Layers abbauen und aus den aktuellen Daten neu aufbauen.
//!
//! Kein inkrementelles Diffing: jede Änderung von Daten, Karte oder
//! Layer-Auswahl entfernt die bisherige Generation vollständig, bevor die
//! neue gezeichnet wird.

use crate::core::{AqiStationMarker, LocationPoiMarker, LocationType, MarkerInfo, WeatherStationMarker};
use crate::map::{MapSurface, MarkerGroup, MarkerOptions, MarkerRegistry};
use crate::render::{AqiIconFactory, PoiIconFactory, WeatherIconFactory};

/// Ergebnis eines Layer-Abgleichs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerSyncOutcome {
    pub removed: usize,
    pub added: usize,
}

/// Baut die Marker einer Gruppe ab und, falls aktiv, neu auf.
///
/// `build` liefert pro Datensatz Marker-Optionen und Detailinfo.
fn rebuild_group<T>(
    registry: &mut MarkerRegistry,
    map: &mut dyn MapSurface,
    group: MarkerGroup,
    active: bool,
    items: impl IntoIterator<Item = T>,
    mut build: impl FnMut(T) -> (MarkerOptions, MarkerInfo),
) -> LayerSyncOutcome {
    let removed = registry.clear_group(map, group);
    if !active {
        if removed > 0 {
            log::debug!("{:?}: Layer inaktiv, {} Marker entfernt", group, removed);
        }
        return LayerSyncOutcome { removed, added: 0 };
    }

    let mut added = 0;
    for item in items {
        let (options, info) = build(item);
        registry.add(map, group, options, info);
        added += 1;
    }
    log::debug!("{:?}: {} Marker entfernt, {} gezeichnet", group, removed, added);
    LayerSyncOutcome { removed, added }
}

/// Wetter-Layer abgleichen.
pub fn sync_weather_layer(
    registry: &mut MarkerRegistry,
    map: &mut dyn MapSurface,
    icons: &mut WeatherIconFactory,
    stations: &[WeatherStationMarker],
    active: bool,
) -> LayerSyncOutcome {
    rebuild_group(registry, map, MarkerGroup::Weather, active, stations, |station| {
        let info = MarkerInfo::for_weather(station);
        let options = MarkerOptions::new(station.position, station.name.clone())
            .snippet(info.subtitle.clone())
            .icon(icons.icon_for(&station.weather_type, station.temperature));
        (options, info)
    })
}

/// AQI-Layer abgleichen.
pub fn sync_aqi_layer(
    registry: &mut MarkerRegistry,
    map: &mut dyn MapSurface,
    icons: &mut AqiIconFactory,
    stations: &[AqiStationMarker],
    active: bool,
) -> LayerSyncOutcome {
    rebuild_group(registry, map, MarkerGroup::Aqi, active, stations, |station| {
        let info = MarkerInfo::for_aqi(station);
        let options = MarkerOptions::new(station.position, station.name.clone())
            .snippet(info.subtitle.clone())
            .icon(icons.icon_for(station.aqi, station.category));
        (options, info)
    })
}

/// POI-Layer eines Typs abgleichen; andere POI-Typen bleiben unberührt.
pub fn sync_poi_layer<'a>(
    registry: &mut MarkerRegistry,
    map: &mut dyn MapSurface,
    icons: &mut PoiIconFactory,
    pois: impl IntoIterator<Item = &'a LocationPoiMarker>,
    location_type: LocationType,
    active: bool,
) -> LayerSyncOutcome {
    let pois = pois
        .into_iter()
        .filter(|poi| poi.location_type == location_type);
    rebuild_group(
        registry,
        map,
        MarkerGroup::Poi(location_type),
        active,
        pois,
        |poi| {
            let info = MarkerInfo::for_poi(poi);
            let options = MarkerOptions::new(poi.position, poi.name.clone())
                .snippet(info.subtitle.clone())
                .icon(icons.icon_for(location_type));
            (options, info)
        },
    )
}
