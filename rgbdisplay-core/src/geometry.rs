//! Rotation and rectangle clamping
//!
//! Drawing calls never fail on geometry: rectangles are pulled back onto the
//! panel and shrunk until they fit. This module holds that policy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Panel rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Parse an angle; only right angles are accepted
    pub const fn from_degrees(degrees: u16) -> Result<Self, ConfigError> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            _ => Err(ConfigError::InvalidRotation),
        }
    }

    /// True for 90 and 270, where width and height trade places
    pub const fn is_transposed(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = ConfigError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rectangle {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Rectangle {
    /// Rectangle covering a single pixel
    pub const fn point(x: u16, y: u16) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x,
            y1: y,
        }
    }

    /// Clamp `(x, y, w, h)` onto a `width` x `height` panel
    ///
    /// The origin is pulled into `[0, width-1] x [0, height-1]`, then the
    /// size is forced into `[1, width-x] x [1, height-y]`. The result is never
    /// empty. `width` and `height` must be non-zero.
    pub fn clamped(x: i32, y: i32, w: i32, h: i32, width: u16, height: u16) -> Self {
        let width = i32::from(width);
        let height = i32::from(height);

        let x = x.clamp(0, width - 1);
        let y = y.clamp(0, height - 1);
        let w = w.max(1).min(width - x);
        let h = h.max(1).min(height - y);

        // All four values are inside [0, u16::MAX] after clamping
        Self {
            x0: x as u16,
            y0: y as u16,
            x1: (x + w - 1) as u16,
            y1: (y + h - 1) as u16,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.y1 - self.y0 + 1
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}
