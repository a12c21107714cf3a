// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Die GPIOs für Strip (GPIO2) und I2C (SDA GPIO6, SCL GPIO7) stehen als
// Peripheral-Typen in der Signatur von `control_task`.

use rgbw_core::config::{DEFAULT_QUIET_DELAY, LogFilter};
use rgbw_core::{ControllerConfig, Duration};

// ============================================================================
// Hauptschleife
// ============================================================================

/// Pause zwischen zwei Ticks (schont den I2C-Bus, wirkt als Entprellung)
pub const TICK_INTERVAL_MS: u64 = 10;

/// Wartezeit nach dem Einschalten bis die I2C-Geräte bereit sind
pub const STARTUP_SETTLE_MS: u64 = 500;

// ============================================================================
// Haupt-Strip (WS2812/Neopixel über RMT)
// ============================================================================

/// Anzahl der LEDs im Haupt-Strip
pub const STRIP_PIXEL_COUNT: usize = 8;

/// RMT Buffer-Größe (3 Farben * 8 Bits pro LED + 1 Reset)
pub const STRIP_BUFFER_SIZE: usize = STRIP_PIXEL_COUNT * 24 + 1;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// I2C Bus
// ============================================================================

/// I2C Taktfrequenz in kHz (Seesaw unterstützt 100 kHz zuverlässig)
pub const I2C_FREQUENCY_KHZ: u32 = 100;

// ============================================================================
// NeoKey 1x4 (Seesaw)
// ============================================================================

/// I2C-Adresse des NeoKey 1x4
pub const NEOKEY_ADDRESS: u8 = 0x30;

/// Seesaw GPIO-Pins der Tasten A..D (active low, Pull-Up)
pub const NEOKEY_KEY_PINS: [u8; 4] = [4, 5, 6, 7];

/// Seesaw-Pin der Tasten-LEDs
pub const NEOKEY_NEOPIXEL_PIN: u8 = 3;

/// Anzahl der Tasten-LEDs
pub const NEOKEY_PIXEL_COUNT: usize = 4;

// ============================================================================
// NeoSlider (Seesaw)
// ============================================================================

/// I2C-Adresse des NeoSlider (A3 getrennt, kein Konflikt mit NeoKey)
pub const NEOSLIDER_ADDRESS: u8 = 0x38;

/// Seesaw ADC-Pin des Schiebereglers
pub const NEOSLIDER_ADC_PIN: u8 = 18;

/// Seesaw-Pin der Slider-LEDs
pub const NEOSLIDER_NEOPIXEL_PIN: u8 = 14;

/// Anzahl der Slider-LEDs
pub const NEOSLIDER_PIXEL_COUNT: usize = 4;

// ============================================================================
// Preset-Speicher (Flash)
// ============================================================================

/// Flash-Offset des Preset-Records
/// 0x9000 ist die NVS-Partition der Standard-Partitionstabelle
pub const PRESET_FLASH_OFFSET: u32 = 0x9000;

/// Ruhezeit nach der letzten Änderung bis zum Auto-Save
pub const PRESET_SAVE_DELAY: Duration = DEFAULT_QUIET_DELAY;

// ============================================================================
// Logging
// ============================================================================

/// Auswahl-Änderungen loggen
pub const LOG_CHANNEL_CHANGES: bool = true;

/// Wert-Änderungen loggen
pub const LOG_VALUE_CHANGES: bool = true;

/// Controller-Konfiguration aus den Konstanten oben
pub fn controller_config() -> ControllerConfig {
    ControllerConfig {
        quiet_delay: PRESET_SAVE_DELAY,
        storage_offset: PRESET_FLASH_OFFSET,
        log: LogFilter {
            channel_changes: LOG_CHANNEL_CHANGES,
            value_changes: LOG_VALUE_CHANGES,
        },
    }
}
