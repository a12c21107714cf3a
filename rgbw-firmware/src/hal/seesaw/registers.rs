// Seesaw Register-Adressen
//
// Zwei-Byte-Adressierung: [Modul-ID, Register-Offset im Modul].
// Alle Mehrbyte-Werte sind Big-Endian.

// ============================================================================
// Modul-IDs
// ============================================================================

pub const MODULE_STATUS: u8 = 0x00;
pub const MODULE_GPIO: u8 = 0x01;
pub const MODULE_ADC: u8 = 0x09;
pub const MODULE_NEOPIXEL: u8 = 0x0E;

// ============================================================================
// Status-Modul
// ============================================================================

/// Software-Reset (Schreiben von 0xFF)
pub const STATUS_SWRST: u8 = 0x7F;

/// Wert für den Software-Reset
pub const SWRST_VALUE: u8 = 0xFF;

// ============================================================================
// GPIO-Modul (32-Bit Pin-Masken)
// ============================================================================

/// Pins als Eingang schalten
pub const GPIO_DIRCLR_BULK: u8 = 0x03;

/// Pegel aller Pins lesen
pub const GPIO_BULK: u8 = 0x04;

/// Pins auf High setzen (bei Eingängen: Pull-Up statt Pull-Down)
pub const GPIO_BULK_SET: u8 = 0x05;

/// Pull-Widerstände aktivieren
pub const GPIO_PULLENSET: u8 = 0x0B;

// ============================================================================
// ADC-Modul
// ============================================================================

/// Basis-Register der ADC-Kanäle, Kanal-Register = Basis + Pin
pub const ADC_CHANNEL_OFFSET: u8 = 0x07;

// ============================================================================
// NeoPixel-Modul
// ============================================================================

pub const NEOPIXEL_PIN: u8 = 0x01;
pub const NEOPIXEL_SPEED: u8 = 0x02;

/// Buffer-Länge in Bytes (16-Bit)
pub const NEOPIXEL_BUF_LENGTH: u8 = 0x03;

/// Pixel-Daten: 16-Bit Start-Offset, danach GRB-Bytes
pub const NEOPIXEL_BUF: u8 = 0x04;

/// Buffer auf die LEDs ausgeben
pub const NEOPIXEL_SHOW: u8 = 0x05;

/// 800 kHz Datenrate (WS2812)
pub const NEOPIXEL_SPEED_800KHZ: u8 = 0x01;

// ============================================================================
// Protokoll
// ============================================================================

/// Wartezeit zwischen Register-Write und Read für GPIO-Zugriffe
pub const READ_DELAY_US: u32 = 250;

/// ADC-Wandlung braucht länger
pub const ADC_READ_DELAY_US: u32 = 500;

/// Wartezeit nach Software-Reset
pub const RESET_DELAY_MS: u32 = 10;

/// Maximale Länge eines I2C-Writes (Seesaw Empfangspuffer)
pub const MAX_WRITE_LEN: usize = 32;
