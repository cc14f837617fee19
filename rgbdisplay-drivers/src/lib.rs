//! Display engine and controller profiles
//!
//! This crate drives the controllers described in `rgbdisplay-core`:
//!
//! - [`Display`] - addressing & blit engine, generic over the transport
//! - [`controllers`] - one static profile per supported controller
//! - embedded-graphics `DrawTarget` support for [`Display`]
//!
//! # Example
//!
//! ```ignore
//! use rgbdisplay_drivers::{controllers::ILI9341, Display, DisplayConfig};
//! use rgbdisplay_hal::SpiTransport;
//!
//! let transport = SpiTransport::new(spi_device, dc_pin, Some(reset_pin));
//! let mut display = Display::new(transport, delay, &ILI9341, DisplayConfig::for_profile(&ILI9341))?;
//! display.init()?;
//! display.fill(Rgb565::BLACK)?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod controllers;
pub mod display;
mod graphics;

#[cfg(test)]
mod mock;

pub use display::{Display, BUFFER_SIZE};

// Re-export what applications need alongside the engine
pub use rgbdisplay_core::{color565, ConfigError, ControllerProfile, DisplayConfig, Error, Rgb565, Rotation};
