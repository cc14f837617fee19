//! HX8353
//!
//! 128x128 controller; its registers come up usable after a software reset.

use rgbdisplay_core::dcs::{CASET, DISPON, RAMRD, RAMWR, RASET, SWRESET};
use rgbdisplay_core::{
    ControllerProfile, InitCommand, ParameterMode, PixelDecoding, PixelEncoding, PositionEncoding, PostInit,
};

use super::{SWRESET_DELAY_MS, UNCAPPED_HZ};

const INIT: &[InitCommand] = &[InitCommand::bare(SWRESET).delay(SWRESET_DELAY_MS), InitCommand::bare(DISPON)];

/// HX8353 profile
pub const HX8353: ControllerProfile = ControllerProfile {
    name: "HX8353",
    column_set: Some(CASET),
    row_set: Some(RASET),
    ram_write: Some(RAMWR),
    ram_read: Some(RAMRD),
    init: INIT,
    post_init: PostInit::None,
    pixel_encoding: PixelEncoding::Rgb565Be,
    position_encoding: PositionEncoding::U16Be,
    pixel_decoding: PixelDecoding::Rgb888,
    parameter_mode: ParameterMode::Data,
    width: 128,
    height: 128,
    x_offset: 0,
    y_offset: 0,
    vertical_scroll: None,
    default_frequency_hz: 12_000_000,
    max_frequency_hz: UNCAPPED_HZ,
};
