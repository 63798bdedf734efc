//! Single-Flight-Scheduling pro Effekt.
//!
//! Jeder Effekt (Layer-Sync, Routen-Overlay, Kamera-Follow) besitzt einen
//! Slot. Ein Slot kennt den zuletzt angewendeten Eingabe-Schlüssel, höchstens
//! einen ausstehenden Schlüssel und einen Generationszähler. Ein neuerer
//! Request ersetzt einen älteren ausstehenden; ein Ticket aus einer älteren
//! Generation kann nach Abschluss nichts mehr als angewendet markieren.

/// Nachweis, aus welcher Generation ein Effekt-Lauf stammt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTicket(u64);

/// Zustand eines Effekts zwischen zwei Läufen.
#[derive(Debug, Clone)]
pub struct EffectSlot<K> {
    applied: Option<K>,
    pending: Option<K>,
    generation: u64,
}

impl<K> Default for EffectSlot<K> {
    fn default() -> Self {
        Self {
            applied: None,
            pending: None,
            generation: 0,
        }
    }
}

impl<K: Clone + PartialEq> EffectSlot<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet neue Eingaben an. Gibt `true` zurück, wenn ein Lauf aussteht.
    ///
    /// Gleiche Eingaben wie zuletzt angewendet werden unterdrückt; ein schon
    /// ausstehender Lauf für dieselben Eingaben bleibt unverändert.
    pub fn request(&mut self, key: K) -> bool {
        if self.pending.as_ref() == Some(&key) {
            return true;
        }
        if self.applied.as_ref() == Some(&key) {
            if self.pending.take().is_some() {
                self.generation += 1;
            }
            return false;
        }
        self.pending = Some(key);
        self.generation += 1;
        true
    }

    /// Entnimmt den ausstehenden Lauf.
    pub fn take_pending(&mut self) -> Option<(K, EffectTicket)> {
        self.pending
            .take()
            .map(|key| (key, EffectTicket(self.generation)))
    }

    /// Markiert einen Lauf als angewendet, sofern er nicht überholt wurde.
    pub fn complete(&mut self, ticket: EffectTicket, key: K) -> bool {
        if ticket.0 != self.generation {
            log::debug!("Effekt-Lauf aus Generation {} verworfen (aktuell {})", ticket.0, self.generation);
            return false;
        }
        self.applied = Some(key);
        true
    }

    /// Vergisst angewendete und ausstehende Eingaben; laufende Tickets verfallen.
    pub fn reset(&mut self) {
        self.applied = None;
        self.pending = None;
        self.generation += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn applied(&self) -> Option<&K> {
        self.applied.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
