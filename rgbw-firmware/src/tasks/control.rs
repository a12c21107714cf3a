// Control Task - Tasten, Slider, Ausgaben und Auto-Save im Polling-Takt
use core::cell::RefCell;

use defmt::{error, info, warn};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal_bus::i2c::RefCellDevice;
use esp_hal::delay::Delay;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal_smartled::smart_led_buffer;
use esp_storage::FlashStorage;
use rgbw_core::{ButtonSource, Controller, PixelSink, SliderSource, StorageMedium};

use crate::config::{
    I2C_FREQUENCY_KHZ, NEOKEY_ADDRESS, NEOKEY_KEY_PINS, NEOKEY_NEOPIXEL_PIN, NEOSLIDER_ADC_PIN,
    NEOSLIDER_ADDRESS, NEOSLIDER_NEOPIXEL_PIN, RMT_CLOCK_MHZ, STARTUP_SETTLE_MS, STRIP_PIXEL_COUNT,
    TICK_INTERVAL_MS, controller_config,
};
use crate::hal::{
    FeedbackPanel, FlashMedium, RmtStripWriter, SeesawDriver, SeesawKeys, SeesawPixels,
    SeesawSlider,
};

/// Hauptschleife - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Ruft [`Controller::tick`] im festen Takt auf. Der Controller liest
/// Tasten und Slider, aktualisiert Werte und Ausgaben und speichert nach
/// der Ruhezeit das Preset. Fehler einzelner Geräte werden dort geloggt,
/// die Schleife läuft immer weiter.
pub async fn control_logic<B, S, P, M>(mut controller: Controller<B, S, P, M>) -> !
where
    B: ButtonSource,
    S: SliderSource,
    P: PixelSink,
    M: StorageMedium,
{
    info!("Entering main loop");
    loop {
        controller.tick(Instant::now());

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(TICK_INTERVAL_MS)).await;
    }
}

/// Control Task - Embassy Task für die Hardware-Initialisierung
///
/// Richtet I2C-Bus, Seesaw-Geräte, RMT-Strip und Flash ein und ruft
/// dann [`control_logic`] auf.
///
/// # Parameter
/// - `i2c0`, `sda` (GPIO6), `scl` (GPIO7): I2C-Bus für NeoKey und NeoSlider
/// - `rmt_peripheral`, `strip_pin` (GPIO2): RMT und Datenleitung des Haupt-Strips
/// - `flash`: Flash Peripheral für den Preset-Speicher
#[embassy_executor::task]
pub async fn control_task(
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO6<'static>,
    scl: esp_hal::peripherals::GPIO7<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    strip_pin: esp_hal::peripherals::GPIO2<'static>,
    flash: esp_hal::peripherals::FLASH<'static>,
) {
    // Seesaw-Firmware braucht nach dem Einschalten etwas Zeit
    Timer::after(Duration::from_millis(STARTUP_SETTLE_MS)).await;

    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ));
    let i2c = match I2c::new(i2c0, i2c_config) {
        Ok(i2c) => i2c.with_sda(sda).with_scl(scl),
        Err(e) => {
            error!("I2C init failed: {}", defmt::Debug2Format(&e));
            return;
        }
    };
    // Ein Bus, mehrere Geräte
    let bus = RefCell::new(i2c);

    let mut key_driver = SeesawDriver::new(RefCellDevice::new(&bus), Delay::new(), NEOKEY_ADDRESS);
    if let Err(e) = key_driver.reset() {
        warn!("NeoKey reset failed: {}", e);
    }
    let mut buttons = SeesawKeys::new(key_driver, NEOKEY_KEY_PINS);
    if let Err(e) = buttons.init() {
        warn!("NeoKey init failed: {}", e);
    }

    let mut slider_driver =
        SeesawDriver::new(RefCellDevice::new(&bus), Delay::new(), NEOSLIDER_ADDRESS);
    if let Err(e) = slider_driver.reset() {
        warn!("NeoSlider reset failed: {}", e);
    }
    let slider = SeesawSlider::new(slider_driver, NEOSLIDER_ADC_PIN);

    let mut key_pixels = SeesawPixels::new(SeesawDriver::new(
        RefCellDevice::new(&bus),
        Delay::new(),
        NEOKEY_ADDRESS,
    ));
    if let Err(e) = key_pixels.init(NEOKEY_NEOPIXEL_PIN) {
        warn!("NeoKey pixels init failed: {}", e);
    }
    let mut slider_pixels = SeesawPixels::new(SeesawDriver::new(
        RefCellDevice::new(&bus),
        Delay::new(),
        NEOSLIDER_ADDRESS,
    ));
    if let Err(e) = slider_pixels.init(NEOSLIDER_NEOPIXEL_PIN) {
        warn!("NeoSlider pixels init failed: {}", e);
    }

    // Buffer für SmartLED Daten erstellen
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(STRIP_PIXEL_COUNT);
    let strip = match RmtStripWriter::new(strip_pin, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
    {
        Ok(strip) => strip,
        Err(e) => {
            error!("Strip init failed: {}", e);
            return;
        }
    };

    let panel = FeedbackPanel::new(strip, key_pixels, slider_pixels);
    let medium = FlashMedium::new(FlashStorage::new(flash));

    let controller = Controller::new(buttons, slider, panel, medium, controller_config());
    info!("RGBW controller ready");

    control_logic(controller).await
}
