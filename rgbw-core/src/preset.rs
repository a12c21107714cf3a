//! Preset-Speicher
//!
//! Ein einzelner 6-Byte-Record an festem Offset:
//!
//! ```text
//! [MAGIC, R, G, B, W, MAGIC ^ R ^ G ^ B ^ W]
//! ```
//!
//! Kein Wear-Leveling, keine Versionierung: der Auto-Save schreibt nur
//! nach einer Ruhezeit, die Schreibfrequenz bleibt niedrig.

use core::fmt;

use crate::config::{MAGIC_BYTE, RECORD_LEN};
use crate::traits::{StorageError, StorageMedium};
use crate::types::ChannelValues;

/// Grund, warum ein gelesener Record verworfen wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// Kein gültiges Kennbyte (erster Start oder fremde Daten)
    MagicMismatch { found: u8 },
    /// Daten beschädigt
    ChecksumMismatch { stored: u8, calculated: u8 },
}

/// Fehler beim Speichern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveError {
    Storage(StorageError),
    /// Zurückgelesene Bytes weichen vom Geschriebenen ab
    VerifyMismatch,
}

impl From<StorageError> for SaveError {
    fn from(error: StorageError) -> Self {
        SaveError::Storage(error)
    }
}

/// Serialisierte Form eines Presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetRecord {
    bytes: [u8; RECORD_LEN],
}

impl PresetRecord {
    pub fn checksum(values: ChannelValues) -> u8 {
        values.to_array().iter().fold(MAGIC_BYTE, |acc, &v| acc ^ v)
    }

    pub fn encode(values: ChannelValues) -> Self {
        let mut bytes = [0u8; RECORD_LEN];
        bytes[0] = MAGIC_BYTE;
        bytes[1..RECORD_LEN - 1].copy_from_slice(&values.to_array());
        bytes[RECORD_LEN - 1] = Self::checksum(values);
        Self { bytes }
    }

    /// Prüft Kennbyte und Checksumme
    ///
    /// Die Wertebereichsprüfung (0-255) ist durch `u8` bereits gegeben.
    pub fn decode(bytes: [u8; RECORD_LEN]) -> Result<ChannelValues, RecordError> {
        let [magic, r, g, b, w, stored] = bytes;
        if magic != MAGIC_BYTE {
            return Err(RecordError::MagicMismatch { found: magic });
        }
        let values = ChannelValues::from_array([r, g, b, w]);
        let calculated = Self::checksum(values);
        if calculated != stored {
            return Err(RecordError::ChecksumMismatch { stored, calculated });
        }
        Ok(values)
    }

    pub fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.bytes
    }
}

/// Speichert und lädt das zuletzt verwendete Preset
pub struct PresetStore<M> {
    medium: M,
    offset: u32,
}

impl<M: StorageMedium> PresetStore<M> {
    pub fn new(medium: M, offset: u32) -> Self {
        Self { medium, offset }
    }

    /// Schreibt den Record und prüft ihn durch Zurücklesen
    ///
    /// Erfolg nur, wenn die gelesenen Bytes exakt den geschriebenen
    /// entsprechen. Fehler des Mediums werden als [`SaveError::Storage`]
    /// gemeldet, nicht weitergeworfen.
    pub fn save(&mut self, values: ChannelValues) -> Result<(), SaveError> {
        let record = PresetRecord::encode(values);
        let data = record.as_bytes();
        info!(
            "Saving preset: R={} G={} B={} W={} -> {=[u8]:#x}",
            values.r,
            values.g,
            values.b,
            values.w,
            &data[..]
        );

        self.medium.write(self.offset, data)?;

        let mut verify = [0u8; RECORD_LEN];
        self.medium.read(self.offset, &mut verify)?;
        debug!("Verification read: {=[u8]:#x}", &verify[..]);

        if verify != *data {
            error!("Preset write verification failed");
            return Err(SaveError::VerifyMismatch);
        }

        info!("Preset saved and verified");
        Ok(())
    }

    /// Lädt das Preset, `None` bei fehlendem oder beschädigtem Record
    pub fn load(&mut self) -> Option<ChannelValues> {
        let mut bytes = [0u8; RECORD_LEN];
        if let Err(e) = self.medium.read(self.offset, &mut bytes) {
            error!("Preset read failed: {}", e);
            return None;
        }
        debug!("Raw preset bytes: {=[u8]:#x}", &bytes[..]);

        match PresetRecord::decode(bytes) {
            Ok(values) => {
                info!(
                    "Preset loaded: R={} G={} B={} W={}",
                    values.r,
                    values.g,
                    values.b,
                    values.w
                );
                Some(values)
            }
            Err(e) => {
                warn!("No valid preset: {}", e);
                None
            }
        }
    }

    /// Überschreibt den Record mit Nullen (ohne Verifikation)
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.medium.write(self.offset, &[0u8; RECORD_LEN])?;
        info!("Preset cleared");
        Ok(())
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    pub fn medium_mut(&mut self) -> &mut M {
        &mut self.medium
    }

    pub fn into_medium(self) -> M {
        self.medium
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MagicMismatch { found } => write!(
                f,
                "magic byte mismatch (expected {:#x}, found {:#x})",
                MAGIC_BYTE, found
            ),
            RecordError::ChecksumMismatch { stored, calculated } => write!(
                f,
                "checksum mismatch (stored {:#x}, calculated {:#x})",
                stored, calculated
            ),
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Storage(e) => write!(f, "{}", e),
            SaveError::VerifyMismatch => f.write_str("write verification failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RecordError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RecordError::MagicMismatch { found } => defmt::write!(
                fmt,
                "Magic byte mismatch (expected {=u8:#x}, found {=u8:#x})",
                MAGIC_BYTE,
                *found
            ),
            RecordError::ChecksumMismatch { stored, calculated } => defmt::write!(
                fmt,
                "Checksum mismatch (stored {=u8:#x}, calculated {=u8:#x})",
                *stored,
                *calculated
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SaveError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SaveError::Storage(e) => defmt::write!(fmt, "{}", e),
            SaveError::VerifyMismatch => defmt::write!(fmt, "Write verification failed"),
        }
    }
}
