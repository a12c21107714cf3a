//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::config::{CHANNEL_MAX, SLIDER_RAW_MAX};

/// Skaliert einen Rohwert linear: `floor(raw * out_max / raw_max)`
///
/// Der Aufrufer garantiert `raw <= raw_max` und `raw_max > 0`.
pub fn map_range(raw: u16, raw_max: u16, out_max: u8) -> u8 {
    (u32::from(raw) * u32::from(out_max) / u32::from(raw_max)) as u8
}

/// Bildet die Slider-Position (0-1023) auf einen Kanalwert (0-255) ab
///
/// # Beispiele
///
/// ```
/// # use rgbw_core::map_slider_to_byte;
/// assert_eq!(map_slider_to_byte(0), 0);
/// assert_eq!(map_slider_to_byte(512), 127);
/// assert_eq!(map_slider_to_byte(1023), 255);
/// ```
pub fn map_slider_to_byte(raw: u16) -> u8 {
    map_range(raw, SLIDER_RAW_MAX, CHANNEL_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_endpoints() {
        assert_eq!(map_slider_to_byte(0), 0);
        assert_eq!(map_slider_to_byte(1023), 255);
    }

    #[test]
    fn test_map_midpoint_floors() {
        // 512 * 255 / 1023 = 127.6...
        assert_eq!(map_slider_to_byte(512), 127);
        assert_eq!(map_slider_to_byte(4), 0);
        assert_eq!(map_slider_to_byte(5), 1);
    }

    #[test]
    fn test_map_monotonic_over_full_range() {
        let mut previous = 0;
        for raw in 0..=SLIDER_RAW_MAX {
            let mapped = map_slider_to_byte(raw);
            assert!(mapped >= previous, "raw {} mapped to {} < {}", raw, mapped, previous);
            previous = mapped;
        }
        assert_eq!(previous, 255);
    }

    #[test]
    fn test_map_range_custom_bounds() {
        assert_eq!(map_range(50, 100, 10), 5);
        assert_eq!(map_range(100, 100, 10), 10);
        assert_eq!(map_range(99, 100, 10), 9);
    }
}
