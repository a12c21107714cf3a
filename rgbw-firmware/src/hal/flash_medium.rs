// Preset-Speicher im internen Flash

use core::fmt::Debug;

use defmt::warn;
use embedded_storage::{ReadStorage, Storage};
use rgbw_core::{StorageError, StorageMedium};

/// [`StorageMedium`] über jedes `embedded-storage` Backend
///
/// `Storage::write` übernimmt Read-Modify-Erase-Write des Sektors,
/// daher ist auch ein Teil-Write von 6 Bytes zulässig.
pub struct FlashMedium<S> {
    flash: S,
}

impl<S> FlashMedium<S>
where
    S: Storage,
    S::Error: Debug,
{
    pub fn new(flash: S) -> Self {
        Self { flash }
    }

    fn check_range(&self, offset: u32, len: usize) -> Result<(), StorageError> {
        let end = offset as usize + len;
        if end > self.flash.capacity() {
            return Err(StorageError::OutOfBounds);
        }
        Ok(())
    }
}

impl<S> StorageMedium for FlashMedium<S>
where
    S: Storage,
    S::Error: Debug,
{
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), StorageError> {
        self.check_range(offset, buf.len())?;
        ReadStorage::read(&mut self.flash, offset, buf).map_err(|e| {
            warn!("Flash read at {=u32:#x} failed: {}", offset, defmt::Debug2Format(&e));
            StorageError::ReadFailed
        })
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), StorageError> {
        self.check_range(offset, data.len())?;
        Storage::write(&mut self.flash, offset, data).map_err(|e| {
            warn!("Flash write at {=u32:#x} failed: {}", offset, defmt::Debug2Format(&e));
            StorageError::WriteFailed
        })
    }
}
