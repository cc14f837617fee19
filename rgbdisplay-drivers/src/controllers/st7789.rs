//! ST7789
//!
//! 240x320 controller, also sold on 240x240 and 240x135 panels that sit at
//! an offset inside the controller RAM. After the init table the engine
//! programs the configured window (offsets included), turns on inversion
//! (the panels are built inverted) and sets MADCTL for rotation 0 / RGB.

use rgbdisplay_core::dcs::{CASET, COLMOD, MADCTL, RAMRD, RAMWR, RASET, SLPOUT, SWRESET};
use rgbdisplay_core::{
    ControllerProfile, InitCommand, ParameterMode, PixelDecoding, PixelEncoding, PositionEncoding, PostInit,
};

use super::{SLPOUT_DELAY_MS, SWRESET_DELAY_MS, UNCAPPED_HZ};

const INIT: &[InitCommand] = &[
    InitCommand::bare(SWRESET).delay(SWRESET_DELAY_MS),
    InitCommand::bare(SLPOUT).delay(SLPOUT_DELAY_MS),
    InitCommand::new(COLMOD, &[0x55]),
    InitCommand::new(MADCTL, &[0x08]),
];

/// ST7789 profile
pub const ST7789: ControllerProfile = ControllerProfile {
    name: "ST7789",
    column_set: Some(CASET),
    row_set: Some(RASET),
    ram_write: Some(RAMWR),
    ram_read: Some(RAMRD),
    init: INIT,
    post_init: PostInit::OffsetWindow,
    pixel_encoding: PixelEncoding::Rgb565Be,
    position_encoding: PositionEncoding::U16Be,
    pixel_decoding: PixelDecoding::Rgb888,
    parameter_mode: ParameterMode::Data,
    width: 240,
    height: 320,
    x_offset: 0,
    y_offset: 0,
    vertical_scroll: None,
    default_frequency_hz: 16_000_000,
    max_frequency_hz: UNCAPPED_HZ,
};
