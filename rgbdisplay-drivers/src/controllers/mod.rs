//! Controller profiles
//!
//! One `const` [`ControllerProfile`](rgbdisplay_core::ControllerProfile) per
//! supported controller. Pass a reference to
//! [`Display::new`](crate::Display::new) together with a
//! [`DisplayConfig`](rgbdisplay_core::DisplayConfig), usually built with
//! `DisplayConfig::for_profile` and adjusted for the actual panel.
//!
//! | Profile | Default panel | Addressing | Notes |
//! |---------|---------------|------------|-------|
//! | [`ILI9341`] | 240x320 | 16-bit | hardware scroll |
//! | [`ST7735`] | 128x128 | 16-bit | |
//! | [`ST7735R`] | 128x160 | 16-bit | BGR / inversion options |
//! | [`ST7735S`] | 128x160 at (2,1) | 16-bit | |
//! | [`ST7789`] | 240x320 | 16-bit | offset window, inverted |
//! | [`HX8357`] | 480x320 | 16-bit | |
//! | [`SSD1331`] | 96x64 | 8-bit | OLED, parameters on the command channel, write-only |
//! | [`SSD1351`] | 128x128 | 8-bit | OLED |
//! | [`GC9A01A`] | 240x240 | 16-bit | round panel |
//! | [`S6D02A1`] | 128x160 | 16-bit | |
//! | [`HX8353`] | 128x128 | 16-bit | |

pub mod gc9a01a;
pub mod hx8353;
pub mod hx8357;
pub mod ili9341;
pub mod s6d02a1;
pub mod ssd1331;
pub mod ssd1351;
pub mod st7735;
pub mod st7789;

pub use gc9a01a::GC9A01A;
pub use hx8353::HX8353;
pub use hx8357::HX8357;
pub use ili9341::ILI9341;
pub use s6d02a1::S6D02A1;
pub use ssd1331::SSD1331;
pub use ssd1351::SSD1351;
pub use st7735::{ST7735, ST7735R, ST7735S};
pub use st7789::ST7789;

/// Wait after a software reset
pub(crate) const SWRESET_DELAY_MS: u32 = 150;
/// Wait after leaving sleep mode
pub(crate) const SLPOUT_DELAY_MS: u32 = 120;
/// Profiles without a controller-imposed clock limit
pub(crate) const UNCAPPED_HZ: u32 = u32::MAX;
