// Adafruit Seesaw Geräte am I2C-Bus

pub mod driver;
pub mod keys;
pub mod pixels;
pub mod registers;
pub mod slider;

pub use driver::{SeesawDriver, SeesawError};
pub use keys::SeesawKeys;
pub use pixels::SeesawPixels;
pub use slider::SeesawSlider;
