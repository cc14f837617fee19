//! Error types
//!
//! Geometry problems on drawing calls are not errors (they are clamped or
//! ignored). What remains is bus failure, asking a controller for something
//! its profile does not offer, bad configuration, and the strict bounds
//! check on image blits.

use core::fmt;

/// Operations a profile may not support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// Column/row window programming (no column-set or row-set opcode)
    AddressWindow,
    /// Reading pixels back (no RAM-read opcode)
    ReadPixel,
    /// Hardware vertical scrolling
    Scroll,
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Rotation is not 0, 90, 180 or 270 degrees
    InvalidRotation,
    /// A reset was requested but no reset pin is wired
    MissingResetPin,
    /// Zero-sized panel, or coordinates the profile cannot encode
    InvalidGeometry,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRotation => f.write_str("rotation must be 0/90/180/270"),
            ConfigError::MissingResetPin => f.write_str("a reset pin was not provided"),
            ConfigError::InvalidGeometry => f.write_str("display geometry not supported by controller"),
        }
    }
}

/// Image preparation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// Source slice length does not match width x height x 3
    SourceSize,
    /// Output buffer cannot hold the encoded image
    BufferTooSmall,
}

/// Display errors, generic over the transport error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus read or write failed
    Transport(E),
    /// The controller profile lacks what the operation needs
    Unsupported(Operation),
    /// Invalid configuration
    Configuration(ConfigError),
    /// Image does not fit on the panel at the requested origin
    OutOfBounds,
    /// Pixel buffer length does not match the blit size
    BufferSize,
    /// `init()` has not completed
    NotInitialized,
    /// Image preparation failed
    Image(ImageError),
}

impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Error::Configuration(e)
    }
}

impl<E> From<ImageError> for Error<E> {
    fn from(e: ImageError) -> Self {
        Error::Image(e)
    }
}
