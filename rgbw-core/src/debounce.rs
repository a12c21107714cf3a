//! Flankenerkennung für die vier Tasten
//!
//! Ein einzelner Sample-Speicher pro Taste. Gegen Prellen schützt das
//! feste Abfrageintervall der Hauptschleife.

use crate::types::CHANNEL_COUNT;

/// Erkennt steigende Flanken (nicht gedrückt → gedrückt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeDetector {
    previous: [bool; CHANNEL_COUNT],
}

impl EdgeDetector {
    /// Alle Tasten gelten beim Start als "nicht gedrückt"
    pub const fn new() -> Self {
        Self {
            previous: [false; CHANNEL_COUNT],
        }
    }

    /// Verarbeitet die Pegel eines Ticks
    ///
    /// Gibt pro Taste `true` zurück, wenn der Pegel jetzt gedrückt und im
    /// vorherigen Tick nicht gedrückt war. Der Speicher wird immer
    /// aktualisiert.
    pub fn update(&mut self, levels: [bool; CHANNEL_COUNT]) -> [bool; CHANNEL_COUNT] {
        let mut edges = [false; CHANNEL_COUNT];
        for (i, (&level, previous)) in levels.iter().zip(self.previous.iter_mut()).enumerate() {
            edges[i] = level && !*previous;
            *previous = level;
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [bool; 4] = [false; 4];

    #[test]
    fn test_edge_fires_once_while_held() {
        let mut detector = EdgeDetector::new();
        assert_eq!(detector.update([true, false, false, false]), [true, false, false, false]);
        assert_eq!(detector.update([true, false, false, false]), NONE);
        assert_eq!(detector.update([true, false, false, false]), NONE);
    }

    #[test]
    fn test_release_does_not_fire() {
        let mut detector = EdgeDetector::new();
        detector.update([false, true, false, false]);
        assert_eq!(detector.update(NONE), NONE);
        // Nach dem Loslassen feuert der nächste Druck wieder
        assert_eq!(detector.update([false, true, false, false])[1], true);
    }

    #[test]
    fn test_press_release_press_fires_twice() {
        let mut detector = EdgeDetector::new();
        assert_eq!(detector.update([false, false, true, false])[2], true);
        assert_eq!(detector.update(NONE)[2], false);
        assert_eq!(detector.update([false, false, true, false])[2], true);
    }

    #[test]
    fn test_simultaneous_edges() {
        let mut detector = EdgeDetector::new();
        assert_eq!(detector.update([true, false, false, true]), [true, false, false, true]);
    }

    #[test]
    fn test_failed_read_resets_memory() {
        let mut detector = EdgeDetector::new();
        detector.update([true, false, false, false]);
        // Lesefehler wird als "nicht gedrückt" verarbeitet
        detector.update(NONE);
        assert_eq!(detector.update([true, false, false, false])[0], true);
    }
}
