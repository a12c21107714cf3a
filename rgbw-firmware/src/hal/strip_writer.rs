// Haupt-Strip: WS2812/Neopixel über das RMT Peripheral

use defmt::error;
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use rgbw_core::{ChannelValues, LedError};
use smart_leds_trait::SmartLedsWrite;

use crate::config::{STRIP_BUFFER_SIZE, STRIP_PIXEL_COUNT};

/// Schreibt eine Farbe auf alle Pixel des Strips
///
/// Hinweis: Der Buffer wird im Task erstellt und als Parameter übergeben,
/// damit er so lange lebt wie der Adapter.
pub struct RmtStripWriter<'a> {
    led: SmartLedsAdapter<'a, STRIP_BUFFER_SIZE>,
}

impl<'a> RmtStripWriter<'a> {
    /// Erstellt einen neuen RmtStripWriter
    ///
    /// # Parameter
    /// - `pin`: GPIO für die Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    pub fn new(
        pin: esp_hal::peripherals::GPIO2<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; STRIP_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|e| {
                error!("RMT init failed: {}", defmt::Debug2Format(&e));
                LedError::InitFailed
            })?;

        let led = SmartLedsAdapter::new(rmt.channel0, pin, buffer);

        Ok(Self { led })
    }

    pub fn fill(&mut self, color: RGB8) -> Result<(), LedError> {
        self.led
            .write(core::iter::repeat_n(color, STRIP_PIXEL_COUNT))
            .map_err(|_| LedError::WriteFailed)
    }

    /// RGBW-Werte auf dem RGB-Strip darstellen (Weiß als Helligkeit)
    pub fn show_values(&mut self, values: ChannelValues) -> Result<(), LedError> {
        self.fill(values.to_rgb_scaled())
    }
}
