//! Mocks für Integration Tests
//!
//! In-Memory Implementierungen der Hardware-Traits mit Fehler-Injektion.
#![allow(dead_code)]

use rgbw_core::{
    BusError, ButtonSource, CHANNEL_COUNT, Feedback, LedError, PixelSink, SliderSource,
    StorageError, StorageMedium,
};

// ============================================================================
// Mock Buttons
// ============================================================================

#[derive(Default)]
pub struct MockButtons {
    pub levels: [bool; CHANNEL_COUNT],
    pub fail_next_read: bool,
    pub read_count: usize,
}

impl MockButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, index: usize) {
        self.levels[index] = true;
    }

    pub fn release_all(&mut self) {
        self.levels = [false; CHANNEL_COUNT];
    }
}

impl ButtonSource for MockButtons {
    fn read_buttons(&mut self) -> Result<[bool; CHANNEL_COUNT], BusError> {
        self.read_count += 1;
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(BusError::Transaction);
        }
        Ok(self.levels)
    }
}

// ============================================================================
// Mock Slider
// ============================================================================

#[derive(Default)]
pub struct MockSlider {
    pub raw: u16,
    pub fail_next_read: bool,
}

impl MockSlider {
    pub fn new(raw: u16) -> Self {
        Self {
            raw,
            fail_next_read: false,
        }
    }
}

impl SliderSource for MockSlider {
    fn read_slider(&mut self) -> Result<u16, BusError> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(BusError::Transaction);
        }
        Ok(self.raw)
    }
}

// ============================================================================
// Mock Pixel Sink
// ============================================================================

#[derive(Default)]
pub struct MockPixels {
    pub last: Option<Feedback>,
    pub show_count: usize,
    pub fail_next_write: bool,
}

impl MockPixels {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PixelSink for MockPixels {
    fn show(&mut self, feedback: &Feedback) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }
        self.last = Some(*feedback);
        self.show_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Storage (NVM im RAM)
// ============================================================================

pub const MEMORY_SIZE: usize = 64;

pub struct MemoryMedium {
    pub data: [u8; MEMORY_SIZE],
    pub write_count: usize,
    /// Nächstes write() schlägt fehl
    pub fail_next_write: bool,
    /// Nächstes read() schlägt fehl
    pub fail_next_read: bool,
    /// Nächstes write() speichert ein Bit falsch (Verifikation schlägt fehl)
    pub corrupt_next_write: bool,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::filled(0)
    }

    /// Speicher mit fremdem Inhalt (z.B. gelöschter Flash = 0xFF)
    pub fn filled(byte: u8) -> Self {
        Self {
            data: [byte; MEMORY_SIZE],
            write_count: 0,
            fail_next_write: false,
            fail_next_read: false,
            corrupt_next_write: false,
        }
    }

    pub fn flip_bit(&mut self, offset: usize, bit: u8) {
        self.data[offset] ^= 1 << bit;
    }
}

impl Default for MemoryMedium {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), StorageError> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(StorageError::ReadFailed);
        }
        let start = offset as usize;
        let src = self
            .data
            .get(start..start + buf.len())
            .ok_or(StorageError::OutOfBounds)?;
        buf.copy_from_slice(src);
        Ok(())
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), StorageError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(StorageError::WriteFailed);
        }
        let start = offset as usize;
        let dst = self
            .data
            .get_mut(start..start + data.len())
            .ok_or(StorageError::OutOfBounds)?;
        dst.copy_from_slice(data);
        if self.corrupt_next_write {
            self.corrupt_next_write = false;
            dst[0] ^= 0x01;
        }
        self.write_count += 1;
        Ok(())
    }
}
