//! Board-agnostic building blocks for SPI RGB display controllers
//!
//! This crate contains everything about a display that does not depend on
//! the bus or the chip HAL:
//!
//! - RGB565 colors and the wire encodings of pixels and positions
//! - Rotation and rectangle clamping
//! - Controller profiles (opcodes, init tables, geometry defaults)
//! - MIPI DCS opcode constants shared by most controllers
//! - Display configuration
//! - Display lifecycle state machine
//! - Image preparation (rotation + RGB565 encoding)
//! - Error types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod dcs;
pub mod error;
pub mod geometry;
pub mod image;
pub mod profile;
pub mod state;

// Re-export key types
pub use color::{color565, PixelDecoding, PixelEncoding, Rgb565};
pub use config::DisplayConfig;
pub use error::{ConfigError, Error, ImageError, Operation};
pub use geometry::{Rectangle, Rotation};
pub use profile::{ControllerProfile, InitCommand, ParameterMode, PositionEncoding, PostInit};
pub use state::{Lifecycle, LifecycleEvent};
