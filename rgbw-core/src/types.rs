//! Core Types für die RGBW-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

use heapless::String;
use rgb::RGB8;

/// Anzahl der Kanäle (fest: R, G, B, W)
pub const CHANNEL_COUNT: usize = 4;

/// Ein einzelner Lichtkanal
///
/// Die Reihenfolge entspricht den Tasten A..D und dem Index in
/// [`ChannelValues`] bzw. [`SelectionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    White,
}

impl Channel {
    /// Alle Kanäle in fester Index-Reihenfolge
    pub const ALL: [Channel; CHANNEL_COUNT] =
        [Channel::Red, Channel::Green, Channel::Blue, Channel::White];

    /// Kanal zu einem Tasten-Index (0..=3)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::White => 3,
        }
    }

    /// Kurzes Label für Log-Ausgaben ("R", "G", "B", "W")
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::White => "W",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::White => "White/Brightness",
        }
    }

    /// Farbe dieses Kanals mit gegebener Intensität
    ///
    /// Weiß wird auf RGB-Indikatoren als gleichmäßiges Grau dargestellt.
    ///
    /// ```
    /// # use rgb::RGB8;
    /// # use rgbw_core::Channel;
    /// assert_eq!(Channel::Green.color(40), RGB8 { r: 0, g: 40, b: 0 });
    /// assert_eq!(Channel::White.color(7), RGB8 { r: 7, g: 7, b: 7 });
    /// ```
    pub fn color(self, level: u8) -> RGB8 {
        match self {
            Channel::Red => RGB8 { r: level, g: 0, b: 0 },
            Channel::Green => RGB8 { r: 0, g: level, b: 0 },
            Channel::Blue => RGB8 { r: 0, g: 0, b: level },
            Channel::White => RGB8 {
                r: level,
                g: level,
                b: level,
            },
        }
    }
}

/// Aktuelle Kanalwerte {R, G, B, W}
///
/// Wird nur durch angewendete Slider-Werte verändert (siehe
/// [`ControlState`](crate::ControlState)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelValues {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl ChannelValues {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::White => self.w,
        }
    }

    pub fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
            Channel::White => self.w = value,
        }
    }

    pub fn to_array(self) -> [u8; CHANNEL_COUNT] {
        [self.r, self.g, self.b, self.w]
    }

    pub fn from_array(values: [u8; CHANNEL_COUNT]) -> Self {
        let [r, g, b, w] = values;
        Self { r, g, b, w }
    }

    /// Farbe für 3-Kanal-Strips: Weiß wirkt als Helligkeitsfaktor
    ///
    /// Bei `w == 0` werden R, G, B unverändert übernommen.
    ///
    /// ```
    /// # use rgb::RGB8;
    /// # use rgbw_core::ChannelValues;
    /// let values = ChannelValues::new(200, 100, 0, 0);
    /// assert_eq!(values.to_rgb_scaled(), RGB8 { r: 200, g: 100, b: 0 });
    ///
    /// let dimmed = ChannelValues::new(200, 100, 0, 51);
    /// assert_eq!(dimmed.to_rgb_scaled(), RGB8 { r: 40, g: 20, b: 0 });
    /// ```
    pub fn to_rgb_scaled(self) -> RGB8 {
        if self.w == 0 {
            return RGB8 {
                r: self.r,
                g: self.g,
                b: self.b,
            };
        }
        let scale = |c: u8| (u16::from(c) * u16::from(self.w) / 255) as u8;
        RGB8 {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

/// Ausgewählte Kanäle (0 bis 4 gleichzeitig)
///
/// Flags werden nur durch [`toggle`](Self::toggle) bei einer erkannten
/// Tasten-Flanke verändert, nie automatisch zurückgesetzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSet {
    flags: [bool; CHANNEL_COUNT],
}

impl SelectionSet {
    pub const fn new() -> Self {
        Self {
            flags: [false; CHANNEL_COUNT],
        }
    }

    /// Invertiert genau ein Flag und gibt den neuen Zustand zurück
    pub fn toggle(&mut self, channel: Channel) -> bool {
        let flag = &mut self.flags[channel.index()];
        *flag = !*flag;
        *flag
    }

    pub fn is_selected(&self, channel: Channel) -> bool {
        self.flags[channel.index()]
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&selected| selected).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Ausgewählte Kanäle in fester Index-Reihenfolge
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL
            .into_iter()
            .filter(move |channel| self.is_selected(*channel))
    }

    /// Labels der Auswahl verbunden mit "+", oder "None" bei leerer Auswahl
    ///
    /// Nur für Log-Ausgaben gedacht.
    ///
    /// ```
    /// # use rgbw_core::{Channel, SelectionSet};
    /// let mut selection = SelectionSet::new();
    /// assert_eq!(selection.selected_string().as_str(), "None");
    /// selection.toggle(Channel::White);
    /// selection.toggle(Channel::Red);
    /// assert_eq!(selection.selected_string().as_str(), "R+W");
    /// ```
    pub fn selected_string(&self) -> String<7> {
        let mut out = String::new();
        // "R+G+B+W" hat genau 7 Zeichen, write kann nicht fehlschlagen
        let _ = fmt::write(&mut out, format_args!("{}", self));
        out
    }
}

impl fmt::Display for SelectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        for (i, channel) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            f.write_str(channel.label())?;
        }
        Ok(())
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelValues {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "RGBW [{}, {}, {}, {}]",
            self.r,
            self.g,
            self.b,
            self.w
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SelectionSet {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.selected_string().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_deselects() {
        let mut selection = SelectionSet::new();
        for channel in Channel::ALL {
            assert!(selection.toggle(channel));
            assert!(!selection.toggle(channel));
        }
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_order_irrelevant() {
        let mut a = SelectionSet::new();
        a.toggle(Channel::Red);
        a.toggle(Channel::Blue);

        let mut b = SelectionSet::new();
        b.toggle(Channel::Blue);
        b.toggle(Channel::Red);

        assert_eq!(a, b);
        assert_eq!(a.count(), 2);
        assert!(a.is_selected(Channel::Red));
        assert!(!a.is_selected(Channel::Green));
        assert!(a.is_selected(Channel::Blue));
        assert!(!a.is_selected(Channel::White));
    }

    #[test]
    fn test_selected_string() {
        let mut selection = SelectionSet::new();
        assert_eq!(selection.selected_string().as_str(), "None");

        selection.toggle(Channel::Green);
        assert_eq!(selection.selected_string().as_str(), "G");

        for channel in [Channel::Red, Channel::Blue, Channel::White] {
            selection.toggle(channel);
        }
        assert_eq!(selection.selected_string().as_str(), "R+G+B+W");
    }

    #[test]
    fn test_channel_index_roundtrip() {
        for (i, channel) in Channel::ALL.into_iter().enumerate() {
            assert_eq!(channel.index(), i);
            assert_eq!(Channel::from_index(i), Some(channel));
        }
        assert_eq!(Channel::from_index(4), None);
    }

    #[test]
    fn test_rgb_scaled_full_white_is_identity() {
        let values = ChannelValues::new(10, 128, 255, 255);
        assert_eq!(values.to_rgb_scaled(), RGB8 { r: 10, g: 128, b: 255 });
    }
}
