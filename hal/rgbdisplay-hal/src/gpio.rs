//! GPIO helpers
//!
//! Small adapters over `embedded_hal::digital::OutputPin` for the pins a
//! display module exposes besides the bus itself.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

/// Placeholder for a pin that is not wired
///
/// Use it as the reset pin type of a [`SpiTransport`](crate::SpiTransport)
/// when the module's reset line is tied high, or anywhere else a pin type is
/// required but nothing is connected. All operations succeed and do nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Backlight control
///
/// Some panels (e.g. ST7735S modules) expose the LED backlight on a separate
/// pin that must be driven before anything is visible. The pin can be
/// active-high (default) or active-low.
pub struct Backlight<P> {
    pin: P,
    /// If true, backlight ON = pin LOW
    inverted: bool,
    /// Current logical state
    on: bool,
}

impl<P: OutputPin> Backlight<P> {
    /// Take the pin and switch the backlight on
    pub fn new(pin: P) -> Result<Self, P::Error> {
        Self::with_polarity(pin, false)
    }

    /// Take an active-low pin and switch the backlight on
    pub fn new_active_low(pin: P) -> Result<Self, P::Error> {
        Self::with_polarity(pin, true)
    }

    fn with_polarity(pin: P, inverted: bool) -> Result<Self, P::Error> {
        let mut backlight = Self {
            pin,
            inverted,
            on: false,
        };
        backlight.set_on(true)?;
        Ok(backlight)
    }

    /// Switch the backlight on or off
    pub fn set_on(&mut self, on: bool) -> Result<(), P::Error> {
        if on != self.inverted {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.on = on;
        Ok(())
    }

    /// Whether the backlight is currently on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_no_pin_always_succeeds() {
        let mut pin = NoPin;
        assert!(pin.set_low().is_ok());
        assert!(pin.set_high().is_ok());
    }

    #[test]
    fn test_backlight_starts_on() {
        let backlight = Backlight::new(MockPin::new()).unwrap();
        assert!(backlight.is_on());
        assert!(backlight.release().high);
    }

    #[test]
    fn test_active_low_backlight() {
        let mut backlight = Backlight::new_active_low(MockPin::new()).unwrap();
        assert!(backlight.is_on());
        assert!(!backlight.pin.high);

        backlight.set_on(false).unwrap();
        assert!(!backlight.is_on());
        assert!(backlight.pin.high);
    }
}
