//! SPI bus settings
//!
//! The transport never configures the bus itself; the chip HAL does. These
//! types describe what a controller expects so the application can set the
//! peripheral up before handing it over.

pub use embedded_hal::spi::{Mode, MODE_0, MODE_3};

/// Bus frequency used when a controller does not ask for anything else
pub const DEFAULT_FREQUENCY_HZ: u32 = 12_000_000;

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY_HZ)
    }
}

impl SpiConfig {
    /// Mode 0 configuration at the given frequency
    pub const fn new(frequency: u32) -> Self {
        Self {
            frequency,
            mode: MODE_0,
        }
    }

    /// Replace the clock mode
    ///
    /// Breakouts that tie CS low usually need mode 3 so the controller can
    /// find byte boundaries from the clock alone.
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Limit the clock to `max` Hz
    pub fn capped(mut self, max: u32) -> Self {
        self.frequency = self.frequency.min(max);
        self
    }
}
