//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung. Treiber-Fehler werden an dieser
//! Grenze in die einfachen Fehler-Enums unten übersetzt.
//!
//! # Implementierungen
//! - **Production:** Seesaw-Treiber, RMT-Strip und Flash (rgbw-firmware)
//! - **Testing:** In-Memory Mocks mit Fehler-Injektion (rgbw-tests)

use core::fmt;

use crate::render::Feedback;
use crate::types::CHANNEL_COUNT;

/// Fehler beim Lesen von Eingängen über den Bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// Bus-Transaktion fehlgeschlagen (NACK, Arbitration, Timeout ...)
    Transaction,
    /// Gerät lieferte einen Wert außerhalb des erlaubten Bereichs
    OutOfRange,
}

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Peripheral konnte nicht initialisiert werden
    InitFailed,
    WriteFailed,
}

/// Fehler beim Zugriff auf den nichtflüchtigen Speicher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    ReadFailed,
    WriteFailed,
    /// Bereich liegt außerhalb des Mediums
    OutOfBounds,
}

/// Quelle für die vier Tasten-Pegel
pub trait ButtonSource {
    /// Liest den aktuellen Pegel aller Tasten (`true` = gedrückt)
    fn read_buttons(&mut self) -> Result<[bool; CHANNEL_COUNT], BusError>;
}

/// Quelle für die Slider-Position
pub trait SliderSource {
    /// Liest den Rohwert in `0..=SLIDER_RAW_MAX`
    fn read_slider(&mut self) -> Result<u16, BusError>;
}

/// Ausgabe für Haupt-Strip, Indikator-Strip und Tasten-LEDs
pub trait PixelSink {
    fn show(&mut self, feedback: &Feedback) -> Result<(), LedError>;
}

/// Byte-adressierbarer nichtflüchtiger Speicher
///
/// Keine Atomarität: Korrektheit wird über Magic-Byte und Checksumme
/// im Record sichergestellt.
pub trait StorageMedium {
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), StorageError>;

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), StorageError>;
}

impl<T: ButtonSource + ?Sized> ButtonSource for &mut T {
    fn read_buttons(&mut self) -> Result<[bool; CHANNEL_COUNT], BusError> {
        (**self).read_buttons()
    }
}

impl<T: SliderSource + ?Sized> SliderSource for &mut T {
    fn read_slider(&mut self) -> Result<u16, BusError> {
        (**self).read_slider()
    }
}

impl<T: PixelSink + ?Sized> PixelSink for &mut T {
    fn show(&mut self, feedback: &Feedback) -> Result<(), LedError> {
        (**self).show(feedback)
    }
}

impl<T: StorageMedium + ?Sized> StorageMedium for &mut T {
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), StorageError> {
        (**self).read(offset, buf)
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), StorageError> {
        (**self).write(offset, data)
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::Transaction => f.write_str("bus transaction failed"),
            BusError::OutOfRange => f.write_str("value out of range"),
        }
    }
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::InitFailed => f.write_str("LED init failed"),
            LedError::WriteFailed => f.write_str("LED write failed"),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed => f.write_str("storage read failed"),
            StorageError::WriteFailed => f.write_str("storage write failed"),
            StorageError::OutOfBounds => f.write_str("storage range out of bounds"),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for BusError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BusError::Transaction => defmt::write!(fmt, "Bus transaction failed"),
            BusError::OutOfRange => defmt::write!(fmt, "Value out of range"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::InitFailed => defmt::write!(fmt, "LED init failed"),
            LedError::WriteFailed => defmt::write!(fmt, "LED write failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StorageError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            StorageError::ReadFailed => defmt::write!(fmt, "Storage read failed"),
            StorageError::WriteFailed => defmt::write!(fmt, "Storage write failed"),
            StorageError::OutOfBounds => defmt::write!(fmt, "Storage range out of bounds"),
        }
    }
}
