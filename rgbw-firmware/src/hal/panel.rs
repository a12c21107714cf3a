// Alle Ausgaben zusammen: Haupt-Strip, Tasten-LEDs, Slider-LEDs

use defmt::warn;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use rgbw_core::{Feedback, LedError, PixelSink};

use crate::config::{NEOKEY_PIXEL_COUNT, NEOSLIDER_PIXEL_COUNT};
use crate::hal::seesaw::SeesawPixels;
use crate::hal::strip_writer::RmtStripWriter;

pub struct FeedbackPanel<'a, I2C, D> {
    strip: RmtStripWriter<'a>,
    keys: SeesawPixels<I2C, D, NEOKEY_PIXEL_COUNT>,
    indicator: SeesawPixels<I2C, D, NEOSLIDER_PIXEL_COUNT>,
}

impl<'a, I2C, D> FeedbackPanel<'a, I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(
        strip: RmtStripWriter<'a>,
        keys: SeesawPixels<I2C, D, NEOKEY_PIXEL_COUNT>,
        indicator: SeesawPixels<I2C, D, NEOSLIDER_PIXEL_COUNT>,
    ) -> Self {
        Self {
            strip,
            keys,
            indicator,
        }
    }
}

impl<'a, I2C, D> PixelSink for FeedbackPanel<'a, I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Schreibt alle drei Ausgaben, auch wenn eine davon fehlschlägt
    fn show(&mut self, feedback: &Feedback) -> Result<(), LedError> {
        let mut result = self.strip.show_values(feedback.primary);

        if let Err(e) = self.keys.write(&feedback.keys) {
            warn!("Key pixels: {}", e);
            result = Err(LedError::WriteFailed);
        }
        if let Err(e) = self.indicator.fill(feedback.indicator) {
            warn!("Slider pixels: {}", e);
            result = Err(LedError::WriteFailed);
        }

        result
    }
}
