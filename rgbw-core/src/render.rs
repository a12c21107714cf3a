//! Render/Feedback
//!
//! Reine Ableitung aus Kanalwerten und Auswahl, kein eigener Zustand.

use rgb::RGB8;

use crate::config::{INDICATOR_IDLE_LEVEL, INDICATOR_WHITE_BOOST, KEY_DIM_DIVISOR};
use crate::types::{CHANNEL_COUNT, Channel, ChannelValues, SelectionSet};

/// Alle Ausgabefarben eines Ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    /// Farbe für jeden Pixel des Haupt-Strips
    pub primary: ChannelValues,
    /// Farbe für jeden Pixel des Indikator-Strips (Slider)
    pub indicator: RGB8,
    /// LED unter jeder Taste
    pub keys: [RGB8; CHANNEL_COUNT],
}

/// Berechnet alle Ausgaben aus dem aktuellen Zustand
pub fn render(values: ChannelValues, selection: &SelectionSet) -> Feedback {
    Feedback {
        primary: values,
        indicator: indicator_color(selection),
        keys: Channel::ALL.map(|channel| key_color(channel, values, selection)),
    }
}

/// Indikator-Farbe der Auswahl
///
/// - keine Auswahl: gedimmtes Neutral
/// - ein Kanal: reine Kanalfarbe
/// - mehrere: additive Mischung, mit Weiß zusätzlich aufgehellt
pub fn indicator_color(selection: &SelectionSet) -> RGB8 {
    match selection.count() {
        0 => Channel::White.color(INDICATOR_IDLE_LEVEL),
        1 => selection
            .iter()
            .next()
            .map(|channel| channel.color(u8::MAX))
            .unwrap_or_default(),
        _ => {
            let full = |channel| if selection.is_selected(channel) { u8::MAX } else { 0 };
            let mut mix = RGB8 {
                r: full(Channel::Red),
                g: full(Channel::Green),
                b: full(Channel::Blue),
            };
            if selection.is_selected(Channel::White) {
                mix.r = mix.r.saturating_add(INDICATOR_WHITE_BOOST);
                mix.g = mix.g.saturating_add(INDICATOR_WHITE_BOOST);
                mix.b = mix.b.saturating_add(INDICATOR_WHITE_BOOST);
            }
            mix
        }
    }
}

/// Tasten-LED: volle Kanalfarbe wenn ausgewählt, sonst gedimmter Wert
pub fn key_color(channel: Channel, values: ChannelValues, selection: &SelectionSet) -> RGB8 {
    if selection.is_selected(channel) {
        channel.color(u8::MAX)
    } else {
        channel.color(values.get(channel) / KEY_DIM_DIVISOR)
    }
}
