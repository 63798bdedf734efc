use airmap_overlay::map::MarkerGroup;
use airmap_overlay::{LocationType, MapLayer, OverlayIntent};

use super::{aqi_samples, pois, weather_stations, Harness};

fn loaded() -> Harness {
    let mut h = Harness::ready();
    h.send(OverlayIntent::WeatherStationsLoaded {
        stations: weather_stations(),
    });
    h.send(OverlayIntent::AqiSamplesLoaded {
        samples: aqi_samples(),
    });
    h.send(OverlayIntent::PoisLoaded { pois: pois() });
    h
}

#[test]
fn test_all_layers_drawn_after_load() {
    let h = loaded();

    assert_eq!(h.map.marker_count(), 3 + 2 + 4);
    assert_eq!(h.state.registry.infos().len(), h.map.marker_count());
}

#[test]
fn test_toggle_weather_off_and_on() {
    let mut h = loaded();

    h.send(OverlayIntent::LayerToggled {
        layer: MapLayer::Weather,
    });
    assert_eq!(h.state.registry.group_len(MarkerGroup::Weather), 0);
    assert_eq!(h.map.marker_count(), 2 + 4);
    assert_eq!(h.state.registry.infos().count_category("Weather"), 0);

    h.send(OverlayIntent::LayerToggled {
        layer: MapLayer::Weather,
    });
    assert_eq!(h.state.registry.group_len(MarkerGroup::Weather), 3);
    assert_eq!(h.map.marker_count(), 3 + 2 + 4);
}

#[test]
fn test_toggling_one_poi_layer_keeps_the_others() {
    let mut h = loaded();
    let parks_before = h.state.registry.handles(MarkerGroup::Poi(LocationType::PublicPark)).to_vec();

    h.send(OverlayIntent::LayerVisibilitySet {
        layer: MapLayer::ChargingStations,
        visible: false,
    });

    assert_eq!(h.state.registry.group_len(MarkerGroup::Poi(LocationType::ChargingStation)), 0);
    assert_eq!(
        h.state.registry.handles(MarkerGroup::Poi(LocationType::PublicPark)),
        parks_before.as_slice()
    );
}

#[test]
fn test_replacing_layer_selection() {
    let mut h = loaded();

    h.send(OverlayIntent::ActiveLayersReplaced {
        layers: [MapLayer::Aqi].into_iter().collect(),
    });

    assert_eq!(h.map.marker_count(), 2);
    let subtitles: Vec<_> = h
        .state
        .registry
        .infos()
        .iter()
        .filter_map(|(_, info)| info.subtitle.clone())
        .collect();
    assert_eq!(subtitles, vec!["AQI 126 · Unhealthy for sensitive groups", "No data"]);
}

#[test]
fn test_tap_lookup_resolves_nearby_marker() {
    let h = loaded();

    let hit = h
        .state
        .marker_near(airmap_overlay::GeoPoint::new(21.0171, 105.8441), 50.0)
        .expect("Park liegt innerhalb von 50 m");
    let info = h.state.marker_info(hit.handle).expect("Detailinfo vorhanden");
    assert_eq!(info.title, "Thong Nhat");
    assert!(h
        .state
        .marker_near(airmap_overlay::GeoPoint::new(10.0, 100.0), 50.0)
        .is_none());
}
