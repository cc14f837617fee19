//! Display configuration
//!
//! Per-instance settings: the panel a controller is mounted on can be smaller
//! than its RAM (hence the offsets), can be rotated, and some modules need
//! BGR ordering or inversion. Defaults come from the controller profile.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Rotation;
use crate::profile::{ControllerProfile, PostInit};

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// Rotation applied when preparing images
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: Rotation,
    /// Column offset into controller RAM
    #[cfg_attr(feature = "serde", serde(default))]
    pub x_offset: u16,
    /// Row offset into controller RAM
    #[cfg_attr(feature = "serde", serde(default))]
    pub y_offset: u16,
    /// BGR subpixel order (ST7735R)
    #[cfg_attr(feature = "serde", serde(default))]
    pub bgr: bool,
    /// Inverted colors (ST7735R)
    #[cfg_attr(feature = "serde", serde(default))]
    pub invert: bool,
    /// Bus clock override in Hz
    #[cfg_attr(feature = "serde", serde(default))]
    pub frequency_hz: Option<u32>,
}

impl DisplayConfig {
    /// Defaults of the panels `profile` usually ships on
    pub const fn for_profile(profile: &ControllerProfile) -> Self {
        Self {
            width: profile.width,
            height: profile.height,
            rotation: Rotation::Deg0,
            x_offset: profile.x_offset,
            y_offset: profile.y_offset,
            bgr: false,
            invert: false,
            frequency_hz: None,
        }
    }

    /// Set the visible panel size
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the RAM offsets
    pub const fn with_offsets(mut self, x_offset: u16, y_offset: u16) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Set the rotation
    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Request BGR subpixel order
    pub const fn with_bgr(mut self, bgr: bool) -> Self {
        self.bgr = bgr;
        self
    }

    /// Request color inversion
    pub const fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Override the bus clock
    pub const fn with_frequency(mut self, frequency_hz: u32) -> Self {
        self.frequency_hz = Some(frequency_hz);
        self
    }

    /// Check that `profile` can address this panel
    ///
    /// The panel must be non-empty and every window coordinate the engine
    /// will emit (including the post-init window) must fit the profile's
    /// position encoding.
    pub fn validate(&self, profile: &ControllerProfile) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidGeometry);
        }

        // OffsetWindow programs one column/row past the panel
        let overshoot = match profile.post_init {
            PostInit::OffsetWindow => 0,
            _ => 1,
        };
        let max = u32::from(profile.position_encoding.max_coordinate());
        let last_x = u32::from(self.x_offset) + u32::from(self.width) - overshoot;
        let last_y = u32::from(self.y_offset) + u32::from(self.height) - overshoot;

        if last_x > max || last_y > max {
            return Err(ConfigError::InvalidGeometry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{PixelDecoding, PixelEncoding};
    use crate::profile::{ParameterMode, PositionEncoding};

    const OLED: ControllerProfile = ControllerProfile {
        name: "oled",
        column_set: Some(0x15),
        row_set: Some(0x75),
        ram_write: Some(0x5C),
        ram_read: None,
        init: &[],
        post_init: PostInit::None,
        pixel_encoding: PixelEncoding::Rgb565Be,
        position_encoding: PositionEncoding::U8,
        pixel_decoding: PixelDecoding::Rgb888,
        parameter_mode: ParameterMode::Data,
        width: 128,
        height: 128,
        x_offset: 0,
        y_offset: 0,
        vertical_scroll: None,
        default_frequency_hz: 16_000_000,
        max_frequency_hz: 16_000_000,
    };

    #[test]
    fn test_defaults_from_profile() {
        let config = DisplayConfig::for_profile(&OLED);
        assert_eq!(config.width, 128);
        assert_eq!(config.height, 128);
        assert_eq!(config.rotation, Rotation::Deg0);
        assert!(!config.bgr);
        assert!(config.validate(&OLED).is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DisplayConfig::for_profile(&OLED)
            .with_size(96, 64)
            .with_offsets(2, 1)
            .with_rotation(Rotation::Deg270)
            .with_bgr(true)
            .with_invert(true)
            .with_frequency(8_000_000);

        assert_eq!((config.width, config.height), (96, 64));
        assert_eq!((config.x_offset, config.y_offset), (2, 1));
        assert_eq!(config.rotation.degrees(), 270);
        assert!(config.bgr && config.invert);
        assert_eq!(config.frequency_hz, Some(8_000_000));
    }

    #[test]
    fn test_rejects_empty_panel() {
        let config = DisplayConfig::for_profile(&OLED).with_size(0, 64);
        assert_eq!(config.validate(&OLED), Err(ConfigError::InvalidGeometry));
    }

    #[test]
    fn test_rejects_unencodable_window() {
        // 8-bit addressing tops out at 255
        let config = DisplayConfig::for_profile(&OLED).with_size(256, 64);
        assert!(config.validate(&OLED).is_ok());

        let config = config.with_offsets(1, 0);
        assert_eq!(config.validate(&OLED), Err(ConfigError::InvalidGeometry));
    }

    #[test]
    fn test_offset_window_needs_one_more() {
        let profile = ControllerProfile {
            post_init: PostInit::OffsetWindow,
            ..OLED
        };
        let config = DisplayConfig::for_profile(&profile).with_size(255, 64);
        assert!(config.validate(&profile).is_ok());

        let config = config.with_size(256, 64);
        assert_eq!(config.validate(&profile), Err(ConfigError::InvalidGeometry));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_toml() {
        let config: DisplayConfig = toml::from_str(
            r#"
width = 240
height = 135
rotation = 90
x_offset = 53
y_offset = 40
"#,
        )
        .unwrap();

        assert_eq!((config.width, config.height), (240, 135));
        assert_eq!(config.rotation, Rotation::Deg90);
        assert_eq!((config.x_offset, config.y_offset), (53, 40));
        assert!(!config.invert);
        assert_eq!(config.frequency_hz, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_toml_bad_rotation() {
        let result: Result<DisplayConfig, _> = toml::from_str("width = 1\nheight = 1\nrotation = 45\n");
        assert!(result.is_err());
    }
}
