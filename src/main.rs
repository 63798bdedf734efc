//! Airmap Overlay Demo.
//!
//! Spielt einen typischen Ablauf gegen eine In-Memory-Karte durch
//! (Karte bereit → Daten → Layer umschalten → Route → Follow), gibt die
//! Marker-Detailtabelle als JSON aus und schreibt optional alle gecachten
//! Icons als PNG in das als erstes Argument übergebene Verzeichnis.

use std::path::{Path, PathBuf};

use airmap_overlay::{
    AqiSample, DirectionPlan, DirectionRoute, GeoPoint, InMemoryMap, LocationPoiMarker,
    LocationType, MapLayer, MapSurface, OverlayController, OverlayIntent, OverlayOptions,
    OverlayState, PlanLocation, ViaPoi, WeatherStationMarker,
};
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Airmap Overlay Demo v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = OverlayOptions::load_from_file(&OverlayOptions::config_path());
    let mut state = OverlayState::with_options(options);
    let mut controller = OverlayController::new(&state);
    let mut map = InMemoryMap::new(1080, 1920);

    let hanoi = GeoPoint::new(21.0285, 105.8542);
    let intents = vec![
        OverlayIntent::MapReady,
        OverlayIntent::LocationPermissionChanged { granted: true },
        OverlayIntent::WeatherStationsLoaded {
            stations: sample_weather(),
        },
        OverlayIntent::AqiSamplesLoaded {
            samples: sample_aqi(),
        },
        OverlayIntent::PoisLoaded { pois: sample_pois() },
        OverlayIntent::LayerToggled {
            layer: MapLayer::BicycleRentals,
        },
        OverlayIntent::DirectionPlanChanged {
            plan: Some(sample_plan(hanoi)),
        },
        OverlayIntent::FollowToggled { enabled: true },
        OverlayIntent::LocationUpdated {
            location: hanoi,
            bearing: Some(90.0),
        },
    ];
    for intent in intents {
        controller.handle_intent(&mut state, Some(&mut map), intent)?;
    }

    let camera = map.camera_position();
    log::info!(
        "{} Marker, {} Polyline(s), {} Kamerafahrten, Kamera bei {:.4}/{:.4} Zoom {:.1}",
        map.marker_count(),
        map.polyline_count(),
        map.animations().len(),
        camera.target.lat,
        camera.target.lon,
        camera.zoom
    );
    log::info!("{} Icons im Cache", controller.icons().cached_count());

    let infos: Vec<_> = state
        .registry
        .infos()
        .iter()
        .map(|(handle, info)| serde_json::json!({ "handle": handle.0, "info": info }))
        .collect();
    println!("{}", serde_json::to_string_pretty(&infos)?);

    if let Some(dir) = std::env::args().nth(1).map(PathBuf::from) {
        write_icons(&controller, &dir)?;
    }
    Ok(())
}

fn write_icons(controller: &OverlayController, dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Verzeichnis {} nicht anlegbar", dir.display()))?;
    let icons = controller.icons().named_icons();
    for (name, icon) in &icons {
        let path = dir.join(format!("{name}.png"));
        icon.save(&path)
            .with_context(|| format!("Icon {} nicht schreibbar", path.display()))?;
    }
    log::info!("{} Icons nach {} geschrieben", icons.len(), dir.display());
    Ok(())
}

fn sample_weather() -> Vec<WeatherStationMarker> {
    vec![
        WeatherStationMarker::new(GeoPoint::new(21.0333, 105.85), "Hoan Kiem", "Mưa rào", Some(27.4)),
        WeatherStationMarker::new(GeoPoint::new(21.0245, 105.8412), "Ba Dinh", "Partly cloudy", Some(29.0)),
        WeatherStationMarker::new(GeoPoint::new(21.0680, 105.8240), "Tay Ho", "Sương mù", Some(24.6)),
        WeatherStationMarker::new(GeoPoint::new(20.9810, 105.7880), "Ha Dong", "Thunderstorm", None),
    ]
}

fn sample_aqi() -> Vec<AqiSample> {
    vec![
        AqiSample {
            position: GeoPoint::new(21.0491, 105.8831),
            name: "Nguyen Van Cu".into(),
            pm25: Some(64.8),
        },
        AqiSample {
            position: GeoPoint::new(21.0150, 105.8000),
            name: "Lang".into(),
            pm25: Some(18.0),
        },
        AqiSample {
            position: GeoPoint::new(21.0040, 105.8460),
            name: "Kim Lien".into(),
            pm25: None,
        },
    ]
}

fn sample_pois() -> Vec<LocationPoiMarker> {
    vec![
        LocationPoiMarker::new(GeoPoint::new(21.0310, 105.8360), "V-Green Charging", LocationType::ChargingStation)
            .with_data_source("OpenChargeMap"),
        LocationPoiMarker::new(GeoPoint::new(21.0170, 105.8440), "Thong Nhat Park", LocationType::PublicPark)
            .with_description("Largest park in central Hanoi"),
        LocationPoiMarker::new(GeoPoint::new(21.0300, 105.8520), "Bike Hub Hoan Kiem", LocationType::BicycleRental),
        LocationPoiMarker::new(GeoPoint::new(21.0368, 105.8342), "Ho Chi Minh Mausoleum", LocationType::TouristAttraction),
    ]
}

fn sample_plan(start: GeoPoint) -> DirectionPlan {
    let destination = GeoPoint::new(21.0580, 105.8220);
    let points = (0..=10)
        .map(|i| {
            let t = i as f64 / 10.0;
            GeoPoint::new(
                start.lat + (destination.lat - start.lat) * t,
                start.lon + (destination.lon - start.lon) * t,
            )
        })
        .collect();
    DirectionPlan {
        start: PlanLocation::new("Hoan Kiem Lake", start),
        destination: PlanLocation::new("West Lake", destination),
        via_pois: vec![
            ViaPoi::new("V-Green Charging", GeoPoint::new(21.0310, 105.8360), "charging-station"),
            ViaPoi::new("Quan Thanh Temple", GeoPoint::new(21.0430, 105.8365), "đền"),
        ],
        route: DirectionRoute {
            points,
            distance_m: 4800.0,
            duration_s: 900.0,
        },
        summary: None,
    }
}
