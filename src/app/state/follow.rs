use crate::core::GeoPoint;

/// Eingaben der Follow-Kamera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FollowState {
    /// Letzter bekannter Standort
    pub location: Option<GeoPoint>,
    /// Fahrtrichtung in Grad; `None` = aktuelle Kartenausrichtung behalten
    pub bearing: Option<f64>,
    /// Kamera folgt dem Standort
    pub enabled: bool,
    /// Navigationsmodus erzwingt die Navigationsneigung
    pub navigation_mode: bool,
    /// Standort-Berechtigung erteilt
    pub permission_granted: bool,
}

impl FollowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, wenn Follow aktiv und erlaubt ist und ein Standort vorliegt.
    pub fn can_follow(&self) -> bool {
        self.enabled && self.permission_granted && self.location.is_some()
    }
}
