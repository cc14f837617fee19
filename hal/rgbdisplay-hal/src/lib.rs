//! rgbdisplay transport layer
//!
//! This crate sits between the display engine and the chip HAL. The engine
//! only ever talks to a [`Transport`]; the SPI flavour of that transport is
//! built on the `embedded-hal` 1.0 traits so that any HAL providing a
//! `SpiDevice` and GPIO output pins can drive a panel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  rgbdisplay-drivers (Display engine)    │
//! └─────────────────────────────────────────┘
//!                     │  Transport
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rgbdisplay-hal (this crate)            │
//! └─────────────────────────────────────────┘
//!                     │  SpiDevice + OutputPin
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chip HAL (embassy-rp, linux-hal, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Items
//!
//! - [`transport::Transport`] - command/data/read/reset contract
//! - [`transport::SpiTransport`] - 4-wire SPI with a D/C line
//! - [`spi::SpiConfig`] - bus settings advertised by controller profiles
//! - [`gpio::NoPin`], [`gpio::Backlight`] - pin helpers

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod transport;

// Re-export key items at crate root for convenience
pub use gpio::{Backlight, NoPin};
pub use spi::{Mode, SpiConfig, MODE_0, MODE_3};
pub use transport::{SpiTransport, SpiTransportError, Transport};
