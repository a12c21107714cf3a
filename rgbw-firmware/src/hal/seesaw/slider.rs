// NeoSlider: Potentiometer am Seesaw-ADC

use defmt::{info, warn};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use rgbw_core::config::SLIDER_RAW_MAX;
use rgbw_core::{BusError, SliderSource};

use super::driver::SeesawDriver;
use super::registers::{ADC_CHANNEL_OFFSET, ADC_READ_DELAY_US, MODULE_ADC};

pub struct SeesawSlider<I2C, D> {
    driver: SeesawDriver<I2C, D>,
    adc_pin: u8,
}

impl<I2C, D> SeesawSlider<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(driver: SeesawDriver<I2C, D>, adc_pin: u8) -> Self {
        info!("NeoSlider at {=u8:#x}, ADC pin {}", driver.address(), adc_pin);
        Self { driver, adc_pin }
    }
}

impl<I2C, D> SliderSource for SeesawSlider<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn read_slider(&mut self) -> Result<u16, BusError> {
        let raw = self
            .driver
            .read_u16(MODULE_ADC, ADC_CHANNEL_OFFSET + self.adc_pin, ADC_READ_DELAY_US)
            .map_err(|e| {
                warn!("NeoSlider: {}", e);
                BusError::Transaction
            })?;

        if raw > SLIDER_RAW_MAX {
            return Err(BusError::OutOfRange);
        }
        Ok(raw)
    }
}
