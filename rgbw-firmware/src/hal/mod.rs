// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus rgbw-core für die echte Hardware:
// Seesaw-Geräte am I2C-Bus, RMT-Strip und internen Flash.

pub mod flash_medium;
pub mod panel;
pub mod seesaw;
pub mod strip_writer;

pub use flash_medium::FlashMedium;
pub use panel::FeedbackPanel;
pub use seesaw::{SeesawDriver, SeesawError, SeesawKeys, SeesawPixels, SeesawSlider};
pub use strip_writer::RmtStripWriter;
