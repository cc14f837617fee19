//! HX8357
//!
//! 480x320 TFT controller (HX8357-D, as on the 3.5" FeatherWing).

use rgbdisplay_core::dcs::{CASET, COLMOD, DISPON, MADCTL, RAMRD, RAMWR, RASET, SLPOUT, SWRESET, TEON, TESCAN};
use rgbdisplay_core::{
    ControllerProfile, InitCommand, ParameterMode, PixelDecoding, PixelEncoding, PositionEncoding, PostInit,
};

use super::{SWRESET_DELAY_MS, UNCAPPED_HZ};

/// Manufacturer registers
pub mod reg {
    /// Oscillator
    pub const SETOSC: u8 = 0xB0;
    /// Power control
    pub const SETPWR1: u8 = 0xB1;
    /// RGB interface
    pub const SETRGB: u8 = 0xB3;
    /// Display cycle
    pub const SETCYC: u8 = 0xB4;
    /// VCOM voltage
    pub const SETCOM: u8 = 0xB6;
    /// Extension command enable
    pub const SETC: u8 = 0xB9;
    /// Source option
    pub const SETSTBA: u8 = 0xC0;
    /// Panel characteristics
    pub const SETPANEL: u8 = 0xCC;
    /// Gamma curve
    pub const SETGAMMA: u8 = 0xE0;
}

/// The HX8357 needs longer than the usual 120 ms to leave sleep
const SLPOUT_DELAY_MS: u32 = 150;

const INIT: &[InitCommand] = &[
    InitCommand::bare(SWRESET).delay(SWRESET_DELAY_MS),
    InitCommand::new(reg::SETC, &[0xFF, 0x83, 0x57]),
    // 0x80 enables the SDO pin
    InitCommand::new(reg::SETRGB, &[0x80, 0x00, 0x06, 0x06]),
    // -1.52 V
    InitCommand::new(reg::SETCOM, &[0x25]),
    // Normal mode 70 Hz, idle mode 55 Hz
    InitCommand::new(reg::SETOSC, &[0x68]),
    // BGR, gate direction swapped
    InitCommand::new(reg::SETPANEL, &[0x05]),
    InitCommand::new(reg::SETPWR1, &[0x00, 0x15, 0x1C, 0x1C, 0x83, 0xAA]),
    InitCommand::new(reg::SETSTBA, &[0x50, 0x50, 0x01, 0x3C, 0x1E, 0x08]),
    InitCommand::new(reg::SETCYC, &[0x02, 0x40, 0x00, 0x2A, 0x2A, 0x0D, 0x78]),
    InitCommand::new(
        reg::SETGAMMA,
        &[
            0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27, 0x1B, 0x08, 0x09, 0x03, 0x02, 0x0A,
            0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27, 0x1B, 0x08, 0x09, 0x03, 0x00, 0x01,
        ],
    ),
    InitCommand::new(COLMOD, &[0x55]),
    InitCommand::new(MADCTL, &[0xC0]),
    InitCommand::new(TEON, &[0x00]),
    // Tear line off
    InitCommand::new(TESCAN, &[0x00, 0x02]),
    InitCommand::bare(SLPOUT).delay(SLPOUT_DELAY_MS),
    InitCommand::new(MADCTL, &[0xA0]),
    InitCommand::bare(DISPON),
];

/// HX8357 profile
pub const HX8357: ControllerProfile = ControllerProfile {
    name: "HX8357",
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
    width: 480,
    height: 320,
    x_offset: 0,
    y_offset: 0,
    vertical_scroll: None,
    default_frequency_hz: 16_000_000,
    max_frequency_hz: UNCAPPED_HZ,
};
