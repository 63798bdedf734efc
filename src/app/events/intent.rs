use std::collections::BTreeSet;

use crate::core::{
    AqiSample, AqiStationMarker, DirectionPlan, GeoPoint, LocationPoiMarker, MapLayer,
    WeatherStationMarker,
};
use crate::shared::OverlayOptions;

/// Eingaben der Kollaborateure (Karten-SDK, Repositories, Standort, Berechtigungen, UI).
/// Intents enthalten keine Mutationslogik.
#[derive(Debug, Clone)]
pub enum OverlayIntent {
    /// Karten-Style ist geladen, die übergebene Karte ist ab jetzt gültig
    MapReady,
    /// Karteninstanz wurde verworfen (z.B. Screen verlassen)
    MapReleased,
    /// Neue Wetterstationen vom Repository
    WeatherStationsLoaded { stations: Vec<WeatherStationMarker> },
    /// Fertig berechnete AQI-Stationen
    AqiStationsLoaded { stations: Vec<AqiStationMarker> },
    /// Rohe PM2.5-Messwerte, der Index wird hier berechnet
    AqiSamplesLoaded { samples: Vec<AqiSample> },
    /// Neue POIs (alle Typen gemischt)
    PoisLoaded { pois: Vec<LocationPoiMarker> },
    /// Layer-Schalter umgelegt
    LayerToggled { layer: MapLayer },
    /// Layer explizit ein- oder ausblenden
    LayerVisibilitySet { layer: MapLayer, visible: bool },
    /// Komplette Layer-Auswahl ersetzen
    ActiveLayersReplaced { layers: BTreeSet<MapLayer> },
    /// Neue Route berechnet oder Route verworfen (`None`)
    DirectionPlanChanged { plan: Option<DirectionPlan> },
    /// Standort-Update mit optionaler Fahrtrichtung (Grad)
    LocationUpdated {
        location: GeoPoint,
        bearing: Option<f64>,
    },
    /// Standort nicht mehr verfügbar
    LocationLost,
    /// Kamera-Follow ein/aus
    FollowToggled { enabled: bool },
    /// Navigationsmodus ein/aus (erzwingt Neigung)
    NavigationModeChanged { enabled: bool },
    /// Standort-Berechtigung geändert
    LocationPermissionChanged { granted: bool },
    /// Optionen wurden im Einstellungsdialog geändert
    OptionsChanged { options: OverlayOptions },
}
