//! S6D02A1
//!
//! 128x160 controller with a minimal bring-up.

use rgbdisplay_core::dcs::{CASET, COLMOD, DISPON, MADCTL, RAMRD, RAMWR, RASET, SLPOUT, SWRESET};
use rgbdisplay_core::{
    ControllerProfile, InitCommand, ParameterMode, PixelDecoding, PixelEncoding, PositionEncoding, PostInit,
};

use super::{SLPOUT_DELAY_MS, SWRESET_DELAY_MS, UNCAPPED_HZ};

const INIT: &[InitCommand] = &[
    InitCommand::bare(SWRESET).delay(SWRESET_DELAY_MS),
    InitCommand::bare(SLPOUT).delay(SLPOUT_DELAY_MS),
    // Bottom to top
    InitCommand::new(MADCTL, &[0x10]),
    InitCommand::new(COLMOD, &[0x05]),
    InitCommand::bare(DISPON),
];

/// S6D02A1 profile
pub const S6D02A1: ControllerProfile = ControllerProfile {
    name: "S6D02A1",
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
    height: 160,
    x_offset: 0,
    y_offset: 0,
    vertical_scroll: None,
    default_frequency_hz: 12_000_000,
    max_frequency_hz: UNCAPPED_HZ,
};
