// Seesaw NeoPixel-Modul: LEDs auf NeoKey und NeoSlider

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use rgb::RGB8;

use super::driver::{SeesawDriver, SeesawError};
use super::registers::{
    MAX_WRITE_LEN, MODULE_NEOPIXEL, NEOPIXEL_BUF, NEOPIXEL_BUF_LENGTH, NEOPIXEL_PIN,
    NEOPIXEL_SHOW, NEOPIXEL_SPEED, NEOPIXEL_SPEED_800KHZ,
};

/// Bytes pro Pixel (GRB)
const BYTES_PER_PIXEL: usize = 3;

/// `N` Pixel an einem Seesaw-Pin
///
/// Alle Pixel passen in einen einzigen Buffer-Write (2 Byte Offset + Daten).
pub struct SeesawPixels<I2C, D, const N: usize> {
    driver: SeesawDriver<I2C, D>,
}

impl<I2C, D, const N: usize> SeesawPixels<I2C, D, N>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(driver: SeesawDriver<I2C, D>) -> Self {
        Self { driver }
    }

    /// Pin, Datenrate und Buffer-Länge einstellen
    pub fn init(&mut self, pin: u8) -> Result<(), SeesawError<I2C::Error>> {
        self.driver.write_u8(MODULE_NEOPIXEL, NEOPIXEL_SPEED, NEOPIXEL_SPEED_800KHZ)?;
        self.driver.write_u16(MODULE_NEOPIXEL, NEOPIXEL_BUF_LENGTH, (N * BYTES_PER_PIXEL) as u16)?;
        self.driver.write_u8(MODULE_NEOPIXEL, NEOPIXEL_PIN, pin)?;
        Ok(())
    }

    pub fn write(&mut self, colors: &[RGB8; N]) -> Result<(), SeesawError<I2C::Error>> {
        let len = 2 + N * BYTES_PER_PIXEL;
        if len > MAX_WRITE_LEN - 2 {
            return Err(SeesawError::PayloadTooLong);
        }

        // Start-Offset 0, danach GRB pro Pixel
        let mut data = [0u8; MAX_WRITE_LEN - 2];
        for (chunk, color) in data[2..len].chunks_exact_mut(BYTES_PER_PIXEL).zip(colors) {
            chunk.copy_from_slice(&[color.g, color.r, color.b]);
        }

        self.driver.write(MODULE_NEOPIXEL, NEOPIXEL_BUF, &data[..len])?;
        self.driver.write(MODULE_NEOPIXEL, NEOPIXEL_SHOW, &[])?;
        Ok(())
    }

    pub fn fill(&mut self, color: RGB8) -> Result<(), SeesawError<I2C::Error>> {
        self.write(&[color; N])
    }
}
