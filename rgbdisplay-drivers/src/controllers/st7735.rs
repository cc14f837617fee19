//! ST7735 family
//!
//! Three variants share the DCS opcodes but differ in their bring-up:
//!
//! - [`ST7735`]: original 128x128 modules
//! - [`ST7735R`]: 128x160 "red tab" modules; the configured panel window is
//!   programmed after init, and BGR order / inversion are optional
//! - [`ST7735S`]: 128x160 modules with RAM offset (2, 1); these usually have
//!   a dedicated backlight pin, see [`Backlight`](rgbdisplay_hal::Backlight)

use rgbdisplay_core::dcs::{CASET, COLMOD, DISPON, INVOFF, MADCTL, NORON, RAMRD, RAMWR, RASET, SLPOUT, SWRESET};
use rgbdisplay_core::{
    ControllerProfile, InitCommand, ParameterMode, PixelDecoding, PixelEncoding, PositionEncoding, PostInit,
};

use super::{SLPOUT_DELAY_MS, SWRESET_DELAY_MS, UNCAPPED_HZ};

/// Manufacturer registers
pub mod reg {
    /// Frame rate control (normal mode)
    pub const FRMCTR1: u8 = 0xB1;
    /// Frame rate control (idle mode)
    pub const FRMCTR2: u8 = 0xB2;
    /// Frame rate control (partial mode)
    pub const FRMCTR3: u8 = 0xB3;
    /// Display inversion control
    pub const INVCTR: u8 = 0xB4;
    /// Display function setting
    pub const DISSET5: u8 = 0xB6;
    pub const PWCTR1: u8 = 0xC0;
    pub const PWCTR2: u8 = 0xC1;
    pub const PWCTR3: u8 = 0xC2;
    pub const PWCTR4: u8 = 0xC3;
    pub const PWCTR5: u8 = 0xC4;
    /// VCOM control
    pub const VMCTR1: u8 = 0xC5;
    pub const PWCTR6: u8 = 0xFC;
    /// Positive gamma correction
    pub const GMCTRP1: u8 = 0xE0;
    /// Negative gamma correction
    pub const GMCTRN1: u8 = 0xE1;
}

const ST7735_INIT: &[InitCommand] = &[
    InitCommand::bare(SWRESET).delay(SWRESET_DELAY_MS),
    InitCommand::bare(SLPOUT).delay(SLPOUT_DELAY_MS),
    InitCommand::new(COLMOD, &[0x05]),
    // Fastest refresh, 6 lines front porch, 3 lines back porch
    InitCommand::new(reg::FRMCTR1, &[0x00, 0x06, 0x03]),
    InitCommand::new(MADCTL, &[0x08]),
    InitCommand::new(reg::DISSET5, &[0x15, 0x02]),
    // Four ASCII characters, not a single 0x00 byte
    InitCommand::new(reg::INVCTR, b"0x00"),
    InitCommand::new(reg::PWCTR1, &[0x02, 0x70]),
    InitCommand::new(reg::PWCTR2, &[0x05]),
    InitCommand::new(reg::PWCTR3, &[0x01, 0x02]),
    InitCommand::new(reg::VMCTR1, &[0x3C, 0x38]),
    InitCommand::new(reg::PWCTR6, &[0x11, 0x15]),
    InitCommand::new(
        reg::GMCTRP1,
        &[0x09, 0x16, 0x09, 0x20, 0x21, 0x1B, 0x13, 0x19, 0x17, 0x15, 0x1E, 0x2B, 0x04, 0x05, 0x02, 0x0E],
    ),
    InitCommand::new(
        reg::GMCTRN1,
        &[0x08, 0x14, 0x08, 0x1E, 0x22, 0x1D, 0x18, 0x1E, 0x18, 0x1A, 0x24, 0x2B, 0x06, 0x06, 0x02, 0x0F],
    ),
    // Columns and rows 2..=129
    InitCommand::new(CASET, &[0x00, 0x02, 0x00, 0x81]),
    InitCommand::new(RASET, &[0x00, 0x02, 0x00, 0x81]),
    InitCommand::bare(NORON),
    InitCommand::bare(DISPON),
];

const ST7735R_INIT: &[InitCommand] = &[
    InitCommand::bare(SWRESET).delay(SWRESET_DELAY_MS),
    InitCommand::bare(SLPOUT).delay(SLPOUT_DELAY_MS),
    InitCommand::new(MADCTL, &[0xC8]),
    InitCommand::new(COLMOD, &[0x05]),
    InitCommand::new(reg::INVCTR, &[0x07]),
    InitCommand::new(reg::FRMCTR1, &[0x01, 0x2C, 0x2D]),
    InitCommand::new(reg::FRMCTR2, &[0x01, 0x2C, 0x2D]),
    InitCommand::new(reg::FRMCTR3, &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]),
    InitCommand::new(reg::PWCTR1, &[0x02, 0x02, 0x84]),
    InitCommand::new(reg::PWCTR2, &[0xC5]),
    InitCommand::new(reg::PWCTR3, &[0x0A, 0x00]),
    InitCommand::new(reg::PWCTR4, &[0x8A, 0x2A]),
    InitCommand::new(reg::PWCTR5, &[0x8A, 0xEE]),
    InitCommand::new(reg::VMCTR1, &[0x0E]),
    InitCommand::bare(INVOFF),
    InitCommand::new(
        reg::GMCTRP1,
        &[0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01, 0x03, 0x10],
    ),
    InitCommand::new(
        reg::GMCTRN1,
        &[0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00, 0x02, 0x10],
    ),
];

const ST7735S_INIT: &[InitCommand] = &[
    InitCommand::new(reg::FRMCTR1, &[0x01, 0x2C, 0x2D]),
    InitCommand::new(reg::FRMCTR2, &[0x01, 0x2C, 0x2D]),
    InitCommand::new(reg::FRMCTR3, &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]),
    // Column inversion
    InitCommand::new(reg::INVCTR, &[0x07]),
    InitCommand::new(reg::PWCTR1, &[0xA2, 0x02, 0x84]),
    InitCommand::new(reg::PWCTR2, &[0xC5]),
    InitCommand::new(reg::PWCTR3, &[0x0A, 0x00]),
    InitCommand::new(reg::PWCTR4, &[0x8A, 0x2A]),
    InitCommand::new(reg::PWCTR5, &[0x8A, 0xEE]),
    InitCommand::new(reg::VMCTR1, &[0x0E]),
    InitCommand::new(
        reg::GMCTRP1,
        &[0x0F, 0x1A, 0x0F, 0x18, 0x2F, 0x28, 0x20, 0x22, 0x1F, 0x1B, 0x23, 0x37, 0x00, 0x07, 0x02, 0x10],
    ),
    InitCommand::new(
        reg::GMCTRN1,
        &[0x0F, 0x1B, 0x0F, 0x17, 0x33, 0x2C, 0x29, 0x2E, 0x30, 0x30, 0x39, 0x3F, 0x00, 0x07, 0x03, 0x10],
    ),
    InitCommand::new(COLMOD, &[0x05]),
    // Scan up to down, right to left
    InitCommand::new(MADCTL, &[0x60]),
    InitCommand::bare(SLPOUT).delay(SLPOUT_DELAY_MS),
    InitCommand::bare(DISPON),
];

/// ST7735 profile
pub const ST7735: ControllerProfile = ControllerProfile {
    name: "ST7735",
    column_set: Some(CASET),
    row_set: Some(RASET),
    ram_write: Some(RAMWR),
    ram_read: Some(RAMRD),
    init: ST7735_INIT,
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
    default_frequency_hz: 16_000_000,
    max_frequency_hz: UNCAPPED_HZ,
};

/// ST7735R profile
pub const ST7735R: ControllerProfile = ControllerProfile {
    name: "ST7735R",
    init: ST7735R_INIT,
    post_init: PostInit::PanelWindow,
    height: 160,
    ..ST7735
};

/// ST7735S profile
pub const ST7735S: ControllerProfile = ControllerProfile {
    name: "ST7735S",
    init: ST7735S_INIT,
    height: 160,
    x_offset: 2,
    y_offset: 1,
    ..ST7735
};
