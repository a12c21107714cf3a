//! RGBW Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Traits für Tasten, Slider, Pixel und Speicher
//! sowie die komplette Steuerungs-Logik (testbar auf dem Host).

#![no_std]

#[macro_use]
mod fmt;

pub mod autosave;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod logic;
pub mod preset;
pub mod render;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use autosave::{AutoSaveScheduler, SaveOutcome, SaveState};
pub use config::{ControllerConfig, LogFilter};
pub use controller::{ControlState, Controller, TickReport};
pub use debounce::EdgeDetector;
pub use logic::{map_range, map_slider_to_byte};
pub use preset::{PresetRecord, PresetStore, RecordError, SaveError};
pub use render::{Feedback, render};
pub use traits::{BusError, ButtonSource, LedError, PixelSink, SliderSource, StorageError, StorageMedium};
pub use types::{CHANNEL_COUNT, Channel, ChannelValues, SelectionSet};

pub use embassy_time::{Duration, Instant};
