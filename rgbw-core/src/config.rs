//! Konstanten und Laufzeit-Konfiguration der Steuerung

use embassy_time::Duration;

// ============================================================================
// Preset-Speicher
// ============================================================================

/// Kennbyte am Anfang eines gültigen Preset-Records
pub const MAGIC_BYTE: u8 = 0xA5;

/// Record-Layout: [magic, R, G, B, W, checksum]
pub const RECORD_LEN: usize = 6;

/// Standard-Offset des Records im nichtflüchtigen Speicher
pub const DEFAULT_STORAGE_OFFSET: u32 = 0;

/// Ruhezeit nach der letzten Wertänderung bis zum Auto-Save
pub const DEFAULT_QUIET_DELAY: Duration = Duration::from_millis(2000);

// ============================================================================
// Slider / Kanalwerte
// ============================================================================

/// Maximaler Rohwert des Slider-ADC (10 Bit)
pub const SLIDER_RAW_MAX: u16 = 1023;

/// Maximaler Kanalwert
pub const CHANNEL_MAX: u8 = 255;

// ============================================================================
// Indikatoren
// ============================================================================

/// Helligkeit des neutralen Indikators wenn kein Kanal ausgewählt ist
pub const INDICATOR_IDLE_LEVEL: u8 = 10;

/// Aufhellung der Mischfarbe wenn Weiß Teil einer Mehrfachauswahl ist
pub const INDICATOR_WHITE_BOOST: u8 = 128;

/// Teiler für die gedimmte Wertanzeige nicht ausgewählter Tasten
pub const KEY_DIM_DIVISOR: u8 = 8;

/// Welche Log-Kategorien ausgegeben werden
///
/// Allgemeine Meldungen (Preset laden/speichern) werden immer geloggt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFilter {
    /// Auswahl/Abwahl von Kanälen
    pub channel_changes: bool,
    /// Neue Kanalwerte nach Slider-Bewegung
    pub value_changes: bool,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            channel_changes: true,
            value_changes: true,
        }
    }
}

/// Konfiguration für [`Controller`](crate::Controller)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub quiet_delay: Duration,
    pub storage_offset: u32,
    pub log: LogFilter,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            quiet_delay: DEFAULT_QUIET_DELAY,
            storage_offset: DEFAULT_STORAGE_OFFSET,
            log: LogFilter::default(),
        }
    }
}
