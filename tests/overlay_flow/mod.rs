//! Gemeinsame Fixtures der Overlay-Abläufe.

mod camera;
mod directions;
mod layers;

use airmap_overlay::{
    AqiSample, DirectionPlan, DirectionRoute, GeoPoint, InMemoryMap, LocationPoiMarker,
    LocationType, OverlayController, OverlayIntent, OverlayState, PlanLocation, ViaPoi,
    WeatherStationMarker,
};

/// Controller mit bereiter Karte.
pub struct Harness {
    pub state: OverlayState,
    pub controller: OverlayController,
    pub map: InMemoryMap,
}

impl Harness {
    pub fn ready() -> Self {
        let state = OverlayState::new();
        let controller = OverlayController::new(&state);
        let mut harness = Self {
            state,
            controller,
            map: InMemoryMap::new(1080, 1920),
        };
        harness.send(OverlayIntent::MapReady);
        harness
    }

    pub fn send(&mut self, intent: OverlayIntent) {
        self.controller
            .handle_intent(&mut self.state, Some(&mut self.map), intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

pub fn weather_stations() -> Vec<WeatherStationMarker> {
    vec![
        WeatherStationMarker::new(GeoPoint::new(21.0333, 105.85), "Hoan Kiem", "heavy rain shower", Some(26.2)),
        WeatherStationMarker::new(GeoPoint::new(21.0245, 105.8412), "Ba Dinh", "mưa to", Some(25.8)),
        WeatherStationMarker::new(GeoPoint::new(21.0680, 105.8240), "Tay Ho", "clear", Some(30.0)),
    ]
}

pub fn aqi_samples() -> Vec<AqiSample> {
    vec![
        AqiSample {
            position: GeoPoint::new(21.0491, 105.8831),
            name: "Nguyen Van Cu".into(),
            pm25: Some(65.0),
        },
        AqiSample {
            position: GeoPoint::new(21.0040, 105.8460),
            name: "Kim Lien".into(),
            pm25: None,
        },
    ]
}

pub fn pois() -> Vec<LocationPoiMarker> {
    vec![
        LocationPoiMarker::new(GeoPoint::new(21.0310, 105.8360), "V-Green", LocationType::ChargingStation),
        LocationPoiMarker::new(GeoPoint::new(21.0170, 105.8440), "Thong Nhat", LocationType::PublicPark),
        LocationPoiMarker::new(GeoPoint::new(21.0400, 105.8350), "Bach Thao", LocationType::PublicPark),
        LocationPoiMarker::new(GeoPoint::new(21.0300, 105.8520), "Bike Hub", LocationType::BicycleRental),
    ]
}

/// Route mit 10 Punkten und zwei Zwischenhalten.
pub fn plan() -> DirectionPlan {
    let start = GeoPoint::new(21.0285, 105.8542);
    let destination = GeoPoint::new(21.0580, 105.8220);
    DirectionPlan {
        start: PlanLocation::new("Hoan Kiem Lake", start),
        destination: PlanLocation::new("West Lake", destination),
        via_pois: vec![
            ViaPoi::new("V-Green", GeoPoint::new(21.0310, 105.8360), "Charging Station"),
            ViaPoi::new("Quan Thanh", GeoPoint::new(21.0430, 105.8365), "đền"),
        ],
        route: DirectionRoute {
            points: (0..10)
                .map(|i| {
                    let t = i as f64 / 9.0;
                    GeoPoint::new(
                        start.lat + (destination.lat - start.lat) * t,
                        start.lon + (destination.lon - start.lon) * t,
                    )
                })
                .collect(),
            distance_m: 4800.0,
            duration_s: 900.0,
        },
        summary: Some("4.8 km via Quan Thanh".into()),
    }
}
