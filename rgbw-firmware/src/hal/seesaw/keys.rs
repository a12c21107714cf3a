// NeoKey 1x4: vier Tasten an Seesaw GPIO-Pins (active low)

use defmt::{info, warn};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use rgbw_core::{BusError, ButtonSource, CHANNEL_COUNT};

use super::driver::{SeesawDriver, SeesawError};
use super::registers::{
    GPIO_BULK, GPIO_BULK_SET, GPIO_DIRCLR_BULK, GPIO_PULLENSET, MODULE_GPIO, READ_DELAY_US,
};

pub struct SeesawKeys<I2C, D> {
    driver: SeesawDriver<I2C, D>,
    pins: [u8; CHANNEL_COUNT],
}

impl<I2C, D> SeesawKeys<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// `pins[i]` ist der Seesaw-Pin der Taste für Kanal `i`
    pub fn new(driver: SeesawDriver<I2C, D>, pins: [u8; CHANNEL_COUNT]) -> Self {
        Self { driver, pins }
    }

    fn mask(&self) -> u32 {
        self.pins.iter().fold(0, |mask, &pin| mask | (1 << pin))
    }

    /// Tasten-Pins als Eingang mit Pull-Up konfigurieren
    pub fn init(&mut self) -> Result<(), SeesawError<I2C::Error>> {
        let mask = self.mask();
        self.driver.write_u32(MODULE_GPIO, GPIO_DIRCLR_BULK, mask)?;
        self.driver.write_u32(MODULE_GPIO, GPIO_PULLENSET, mask)?;
        self.driver.write_u32(MODULE_GPIO, GPIO_BULK_SET, mask)?;
        info!("NeoKey at {=u8:#x} ready", self.driver.address());
        Ok(())
    }
}

impl<I2C, D> ButtonSource for SeesawKeys<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn read_buttons(&mut self) -> Result<[bool; CHANNEL_COUNT], BusError> {
        let bits = self
            .driver
            .read_u32(MODULE_GPIO, GPIO_BULK, READ_DELAY_US)
            .map_err(|e| {
                warn!("NeoKey: {}", e);
                BusError::Transaction
            })?;
        // Pull-Up: gedrückt = Low
        Ok(self.pins.map(|pin| bits & (1 << pin) == 0))
    }
}
