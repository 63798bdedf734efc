//! Luftqualitätsindex (AQI) aus PM2.5-Konzentrationen.
//!
//! Stückweise lineare Interpolation über eine feste Breakpoint-Tabelle
//! (µg/m³ → Index 0..500, sieben Kategorien).

use serde::{Deserialize, Serialize};

/// Schweregrad eines AQI-Werts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    VeryHazardous,
}

impl AqiCategory {
    /// Alle Kategorien in aufsteigender Schwere.
    pub const ALL: [AqiCategory; 7] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
        AqiCategory::VeryHazardous,
    ];

    /// Anzeigename für Detail-Popups.
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitive => "Unhealthy for sensitive groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very unhealthy",
            AqiCategory::Hazardous => "Hazardous",
            AqiCategory::VeryHazardous => "Very hazardous",
        }
    }

    /// Badge-Farbe (RGB) nach gängiger AQI-Farbskala.
    pub fn color(&self) -> [u8; 3] {
        match self {
            AqiCategory::Good => [0, 228, 0],
            AqiCategory::Moderate => [255, 255, 0],
            AqiCategory::UnhealthyForSensitive => [255, 126, 0],
            AqiCategory::Unhealthy => [255, 0, 0],
            AqiCategory::VeryUnhealthy => [143, 63, 151],
            AqiCategory::Hazardous => [126, 0, 35],
            AqiCategory::VeryHazardous => [76, 0, 20],
        }
    }
}

/// Ein Konzentrationsbereich mit zugehörigem Indexbereich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiBreakpoint {
    pub concentration_low: f64,
    pub concentration_high: f64,
    pub index_low: i32,
    pub index_high: i32,
    pub category: AqiCategory,
}

impl AqiBreakpoint {
    const fn new(
        concentration_low: f64,
        concentration_high: f64,
        index_low: i32,
        index_high: i32,
        category: AqiCategory,
    ) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
            category,
        }
    }
}

/// PM2.5-Breakpoints (µg/m³), 0..500 in sieben Bändern.
pub const PM25_BREAKPOINTS: [AqiBreakpoint; 7] = [
    AqiBreakpoint::new(0.0, 25.0, 0, 50, AqiCategory::Good),
    AqiBreakpoint::new(25.0, 50.0, 51, 100, AqiCategory::Moderate),
    AqiBreakpoint::new(50.0, 80.0, 101, 150, AqiCategory::UnhealthyForSensitive),
    AqiBreakpoint::new(80.0, 150.0, 151, 200, AqiCategory::Unhealthy),
    AqiBreakpoint::new(150.0, 250.0, 201, 300, AqiCategory::VeryUnhealthy),
    AqiBreakpoint::new(250.0, 350.0, 301, 400, AqiCategory::Hazardous),
    AqiBreakpoint::new(350.0, 500.0, 401, 500, AqiCategory::VeryHazardous),
];

/// Ergebnis einer AQI-Berechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AqiReading {
    pub index: i32,
    pub category: AqiCategory,
}

/// Berechnet den AQI mit der festen PM2.5-Tabelle.
pub fn compute_aqi(concentration: f64) -> Option<AqiReading> {
    compute_aqi_with(&PM25_BREAKPOINTS, concentration)
}

/// Berechnet den AQI mit einer beliebigen, aufsteigend sortierten Tabelle.
///
/// - Negative Konzentrationen (und NaN) zählen als 0.
/// - Gewählt wird das erste Band mit `concentration_high >= c`; oberhalb
///   des Tabellenendes gilt das letzte Band, der Index wird dort auf
///   `index_high` begrenzt.
/// - `None` nur bei leerer Tabelle.
pub fn compute_aqi_with(table: &[AqiBreakpoint], concentration: f64) -> Option<AqiReading> {
    let c = concentration.max(0.0);
    let band = table
        .iter()
        .find(|bp| bp.concentration_high >= c)
        .or_else(|| table.last())?;

    let width = band.concentration_high - band.concentration_low;
    let index = if width <= 0.0 {
        band.index_high
    } else {
        let fraction = (c - band.concentration_low) / width;
        let raw = band.index_low as f64 + fraction * (band.index_high - band.index_low) as f64;
        (raw.round() as i32).clamp(band.index_low, band.index_high)
    };

    Some(AqiReading {
        index,
        category: band.category,
    })
}
