// Seesaw Protokoll-Treiber (blocking)
//
// Kapselt die I2C-Primitive der Seesaw-Firmware inklusive der
// Wartezeit zwischen Register-Write und Read.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::registers::{MAX_WRITE_LEN, MODULE_STATUS, RESET_DELAY_MS, STATUS_SWRST, SWRST_VALUE};

/// Fehler bei der Kommunikation mit einem Seesaw-Gerät
#[derive(Debug)]
pub enum SeesawError<E> {
    /// Fehler auf dem I2C-Bus
    I2c(E),
    /// Nutzdaten passen nicht in einen Seesaw-Write
    PayloadTooLong,
}

impl<E> From<E> for SeesawError<E> {
    fn from(error: E) -> Self {
        SeesawError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for SeesawError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeesawError::I2c(e) => write!(f, "I2C error: {:?}", e),
            SeesawError::PayloadTooLong => f.write_str("payload exceeds seesaw write buffer"),
        }
    }
}

impl<E: fmt::Debug> defmt::Format for SeesawError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            SeesawError::I2c(e) => defmt::write!(f, "I2C error: {}", defmt::Debug2Format(e)),
            SeesawError::PayloadTooLong => defmt::write!(f, "Payload too long"),
        }
    }
}

/// Ein Seesaw-Gerät auf dem Bus
///
/// Nutzt getrennte `write()` und `read()` statt `write_read()`, weil die
/// Firmware zwischen beiden Phasen Zeit zum Vorbereiten der Antwort braucht.
pub struct SeesawDriver<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> SeesawDriver<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Software-Reset, danach kurz warten bis die Firmware wieder antwortet
    pub fn reset(&mut self) -> Result<(), SeesawError<I2C::Error>> {
        self.write_u8(MODULE_STATUS, STATUS_SWRST, SWRST_VALUE)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    fn write_then_read(
        &mut self,
        module: u8,
        register: u8,
        buffer: &mut [u8],
        delay_us: u32,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.i2c.write(self.address, &[module, register])?;
        self.delay.delay_us(delay_us);
        self.i2c.read(self.address, buffer)?;
        Ok(())
    }

    pub fn read_u32(
        &mut self,
        module: u8,
        register: u8,
        delay_us: u32,
    ) -> Result<u32, SeesawError<I2C::Error>> {
        let mut buf = [0u8; 4];
        self.write_then_read(module, register, &mut buf, delay_us)?;
        Ok(u32::from_be_bytes(buf))
    }

    pub fn read_u16(
        &mut self,
        module: u8,
        register: u8,
        delay_us: u32,
    ) -> Result<u16, SeesawError<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.write_then_read(module, register, &mut buf, delay_us)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Schreibt Register-Adresse und Nutzdaten in einer Transaktion
    pub fn write(
        &mut self,
        module: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), SeesawError<I2C::Error>> {
        let len = data.len() + 2;
        if len > MAX_WRITE_LEN {
            return Err(SeesawError::PayloadTooLong);
        }

        let mut buf = [0u8; MAX_WRITE_LEN];
        buf[0] = module;
        buf[1] = register;
        buf[2..len].copy_from_slice(data);

        self.i2c.write(self.address, &buf[..len])?;
        Ok(())
    }

    pub fn write_u32(
        &mut self,
        module: u8,
        register: u8,
        value: u32,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.write(module, register, &value.to_be_bytes())
    }

    pub fn write_u16(
        &mut self,
        module: u8,
        register: u8,
        value: u16,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.write(module, register, &value.to_be_bytes())
    }

    pub fn write_u8(
        &mut self,
        module: u8,
        register: u8,
        value: u8,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.write(module, register, &[value])
    }
}
