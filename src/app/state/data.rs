use crate::core::{AqiStationMarker, DirectionPlan, LocationPoiMarker, LocationType, WeatherStationMarker};

/// Revisionszähler der Eingabedaten; steigt nur bei inhaltlicher Änderung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataRevisions {
    pub weather: u64,
    pub aqi: u64,
    pub pois: u64,
    pub plan: u64,
}

/// Zuletzt gelieferte Domänendaten (unveränderliche Werte der Repositories).
#[derive(Debug, Clone, Default)]
pub struct OverlayData {
    weather: Vec<WeatherStationMarker>,
    aqi: Vec<AqiStationMarker>,
    pois: Vec<LocationPoiMarker>,
    plan: Option<DirectionPlan>,
    revisions: DataRevisions,
}

impl OverlayData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weather(&self) -> &[WeatherStationMarker] {
        &self.weather
    }

    pub fn aqi(&self) -> &[AqiStationMarker] {
        &self.aqi
    }

    pub fn pois(&self) -> &[LocationPoiMarker] {
        &self.pois
    }

    /// POIs eines Typs in Lieferreihenfolge.
    pub fn pois_of(&self, location_type: LocationType) -> impl Iterator<Item = &LocationPoiMarker> {
        self.pois
            .iter()
            .filter(move |poi| poi.location_type == location_type)
    }

    pub fn plan(&self) -> Option<&DirectionPlan> {
        self.plan.as_ref()
    }

    pub fn revisions(&self) -> DataRevisions {
        self.revisions
    }

    /// Ersetzt die Wetterstationen. Gibt `true` zurück, wenn sich etwas geändert hat.
    ///
    /// Nicht-endliche Temperaturen werden als fehlend übernommen.
    pub fn set_weather(&mut self, mut stations: Vec<WeatherStationMarker>) -> bool {
        for station in &mut stations {
            station.temperature = station.temperature.filter(|t| t.is_finite());
        }
        replace_if_changed(&mut self.weather, stations, &mut self.revisions.weather)
    }

    pub fn set_aqi(&mut self, stations: Vec<AqiStationMarker>) -> bool {
        replace_if_changed(&mut self.aqi, stations, &mut self.revisions.aqi)
    }

    pub fn set_pois(&mut self, pois: Vec<LocationPoiMarker>) -> bool {
        replace_if_changed(&mut self.pois, pois, &mut self.revisions.pois)
    }

    pub fn set_plan(&mut self, plan: Option<DirectionPlan>) -> bool {
        replace_if_changed(&mut self.plan, plan, &mut self.revisions.plan)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T, revision: &mut u64) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    *revision += 1;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn test_identical_data_keeps_revision() {
        let mut data = OverlayData::new();
        let stations = vec![WeatherStationMarker::new(GeoPoint::new(21.0, 105.8), "Lang", "clear", Some(30.0))];

        assert!(data.set_weather(stations.clone()));
        assert_eq!(data.revisions().weather, 1);
        assert!(!data.set_weather(stations));
        assert_eq!(data.revisions().weather, 1);
        assert!(data.set_weather(Vec::new()));
        assert_eq!(data.revisions().weather, 2);
    }

    #[test]
    fn test_nan_temperature_counts_as_identical() {
        let mut data = OverlayData::new();
        let station = WeatherStationMarker {
            position: GeoPoint::new(21.0, 105.8),
            name: "Lang".into(),
            weather_type: "rain".into(),
            temperature: Some(f64::NAN),
        };

        assert!(data.set_weather(vec![station.clone()]));
        assert!(!data.set_weather(vec![station]));
        assert_eq!(data.revisions().weather, 1);
        assert_eq!(data.weather()[0].temperature, None);
    }

    #[test]
    fn test_pois_of_filters_by_type() {
        let mut data = OverlayData::new();
        data.set_pois(vec![
            LocationPoiMarker::new(GeoPoint::new(21.0, 105.8), "EV 1", LocationType::ChargingStation),
            LocationPoiMarker::new(GeoPoint::new(21.0, 105.9), "Park", LocationType::PublicPark),
            LocationPoiMarker::new(GeoPoint::new(21.1, 105.8), "EV 2", LocationType::ChargingStation),
        ]);
        let names: Vec<_> = data
            .pois_of(LocationType::ChargingStation)
            .map(|poi| poi.name.as_str())
            .collect();
        assert_eq!(names, vec!["EV 1", "EV 2"]);
    }
}
