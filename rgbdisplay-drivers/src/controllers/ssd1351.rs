//! SSD1351
//!
//! 128x128 RGB OLED controller with 8-bit window addressing. Rated for a
//! 16 MHz bus clock at most.

use rgbdisplay_core::{
    ControllerProfile, InitCommand, ParameterMode, PixelDecoding, PixelEncoding, PositionEncoding, PostInit,
};

/// SSD1351 opcodes
pub mod reg {
    pub const SET_COLUMN: u8 = 0x15;
    pub const SET_ROW: u8 = 0x75;
    pub const WRITE_RAM: u8 = 0x5C;
    pub const READ_RAM: u8 = 0x5D;
    pub const SET_REMAP: u8 = 0xA0;
    pub const START_LINE: u8 = 0xA1;
    pub const DISPLAY_OFFSET: u8 = 0xA2;
    pub const DISPLAY_ALL_OFF: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const FUNCTION_SELECT: u8 = 0xAB;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const PRECHARGE: u8 = 0xB1;
    pub const DISPLAY_ENHANCE: u8 = 0xB2;
    pub const CLOCK_DIV: u8 = 0xB3;
    pub const SET_VSL: u8 = 0xB4;
    pub const SET_GPIO: u8 = 0xB5;
    pub const PRECHARGE2: u8 = 0xB6;
    pub const SET_GRAY: u8 = 0xB8;
    pub const USE_LUT: u8 = 0xB9;
    pub const PRECHARGE_LEVEL: u8 = 0xBB;
    pub const VCOMH: u8 = 0xBE;
    pub const CONTRAST_ABC: u8 = 0xC1;
    pub const CONTRAST_MASTER: u8 = 0xC7;
    pub const MUX_RATIO: u8 = 0xCA;
    pub const COMMAND_LOCK: u8 = 0xFD;
    pub const HORIZ_SCROLL: u8 = 0x96;
    pub const STOP_SCROLL: u8 = 0x9E;
    pub const START_SCROLL: u8 = 0x9F;
}

/// Controller limit
pub const MAX_FREQUENCY_HZ: u32 = 16_000_000;

const INIT: &[InitCommand] = &[
    InitCommand::new(reg::COMMAND_LOCK, &[0x12]),
    InitCommand::new(reg::COMMAND_LOCK, &[0xB1]),
    InitCommand::bare(reg::DISPLAY_OFF),
    InitCommand::new(reg::DISPLAY_ENHANCE, &[0xA4, 0x00, 0x00]),
    // 7:4 oscillator frequency, 3:0 clock divider
    InitCommand::new(reg::CLOCK_DIV, &[0xF0]),
    InitCommand::new(reg::MUX_RATIO, &[0x7F]),
    InitCommand::new(reg::SET_REMAP, &[0x74]),
    InitCommand::new(reg::START_LINE, &[0x00]),
    InitCommand::new(reg::DISPLAY_OFFSET, &[0x00]),
    InitCommand::new(reg::SET_GPIO, &[0x00]),
    InitCommand::new(reg::FUNCTION_SELECT, &[0x01]),
    InitCommand::new(reg::PRECHARGE, &[0x32]),
    InitCommand::new(reg::PRECHARGE_LEVEL, &[0x1F]),
    InitCommand::new(reg::VCOMH, &[0x05]),
    InitCommand::bare(reg::NORMAL_DISPLAY),
    InitCommand::new(reg::CONTRAST_ABC, &[0xC8, 0x80, 0xC8]),
    InitCommand::new(reg::CONTRAST_MASTER, &[0x0A]),
    InitCommand::new(reg::SET_VSL, &[0xA0, 0xB5, 0x55]),
    InitCommand::new(reg::PRECHARGE2, &[0x01]),
    InitCommand::bare(reg::DISPLAY_ON),
];

/// SSD1351 profile
pub const SSD1351: ControllerProfile = ControllerProfile {
    name: "SSD1351",
    column_set: Some(reg::SET_COLUMN),
    row_set: Some(reg::SET_ROW),
    ram_write: Some(reg::WRITE_RAM),
    ram_read: Some(reg::READ_RAM),
    init: INIT,
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
    max_frequency_hz: MAX_FREQUENCY_HZ,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockTransport, Op};
    use crate::Display;
    use rgbdisplay_core::{DisplayConfig, Rgb565};

    #[test]
    fn test_frequency_capped() {
        assert_eq!(SSD1351.spi_config(Some(24_000_000), None).frequency, 16_000_000);
        assert_eq!(SSD1351.spi_config(Some(8_000_000), None).frequency, 8_000_000);
    }

    #[test]
    fn test_init_and_pixel() {
        let mut transport = MockTransport::with_ram(&SSD1351);
        let mut display =
            Display::new(&mut transport, MockDelay::default(), &SSD1351, DisplayConfig::for_profile(&SSD1351))
                .unwrap();
        display.init().unwrap();
        display.write_pixel(127, 127, Rgb565::BLUE).unwrap();
        assert_eq!(display.read_pixel(127, 127), Ok(Rgb565::BLUE));
        drop(display);

        let commands = transport.commands();
        assert_eq!(&commands[..3], &[reg::COMMAND_LOCK, reg::COMMAND_LOCK, reg::DISPLAY_OFF]);
        assert_eq!(commands[19], reg::DISPLAY_ON);
        // Single-byte coordinates
        assert!(transport.ops.contains(&Op::Data(vec![127, 127])));
        assert_eq!(transport.ops.last(), Some(&Op::Read(Some(reg::READ_RAM), 3)));
    }
}
