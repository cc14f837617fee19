//! SSD1331
//!
//! 96x64 RGB OLED controller. Its command set is not DCS: parameters travel
//! on the command channel (D/C low) and there is no memory-write opcode.
//! Pixel data simply follows the column/row window with D/C high. RAM
//! cannot be read back over SPI.

use rgbdisplay_core::{
    ControllerProfile, InitCommand, ParameterMode, PixelDecoding, PixelEncoding, PositionEncoding, PostInit,
};

use super::UNCAPPED_HZ;

/// SSD1331 opcodes
pub mod reg {
    pub const SET_COLUMN: u8 = 0x15;
    pub const SET_ROW: u8 = 0x75;
    pub const DRAW_LINE: u8 = 0x21;
    pub const DRAW_RECT: u8 = 0x22;
    pub const FILL: u8 = 0x26;
    pub const PHASE_PERIOD: u8 = 0x12;
    pub const CONTRAST_A: u8 = 0x81;
    pub const CONTRAST_B: u8 = 0x82;
    pub const CONTRAST_C: u8 = 0x83;
    pub const MASTER_CURRENT: u8 = 0x87;
    pub const PRECHARGE_A: u8 = 0x8A;
    pub const PRECHARGE_B: u8 = 0x8B;
    pub const PRECHARGE_C: u8 = 0x8C;
    pub const SET_REMAP: u8 = 0xA0;
    pub const START_LINE: u8 = 0xA1;
    pub const DISPLAY_OFFSET: u8 = 0xA2;
    pub const NORMAL_DISPLAY: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const DISPLAY_ALL_OFF: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_MASTER: u8 = 0xAD;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const POWER_MODE: u8 = 0xB0;
    pub const PRECHARGE: u8 = 0xB1;
    pub const CLOCK_DIV: u8 = 0xB3;
    pub const PRECHARGE_LEVEL: u8 = 0xBB;
    pub const VCOMH: u8 = 0xBE;
    pub const LOCK: u8 = 0xFD;
}

const INIT: &[InitCommand] = &[
    InitCommand::bare(reg::DISPLAY_OFF),
    InitCommand::new(reg::LOCK, &[0x0B]),
    // RGB color order
    InitCommand::new(reg::SET_REMAP, &[0x72]),
    InitCommand::new(reg::START_LINE, &[0x00]),
    InitCommand::new(reg::DISPLAY_OFFSET, &[0x00]),
    InitCommand::bare(reg::NORMAL_DISPLAY),
    InitCommand::new(reg::PHASE_PERIOD, &[0x31]),
    InitCommand::new(reg::SET_MULTIPLEX, &[0x3F]),
    InitCommand::new(reg::SET_MASTER, &[0x8E]),
    InitCommand::new(reg::POWER_MODE, &[0x0B]),
    InitCommand::new(reg::PRECHARGE, &[0x31]),
    InitCommand::new(reg::CLOCK_DIV, &[0xF0]),
    InitCommand::new(reg::VCOMH, &[0x3E]),
    InitCommand::new(reg::MASTER_CURRENT, &[0x0C]),
    InitCommand::new(reg::PRECHARGE_A, &[0x64]),
    InitCommand::new(reg::PRECHARGE_B, &[0x78]),
    InitCommand::new(reg::PRECHARGE_C, &[0x64]),
    InitCommand::new(reg::PRECHARGE_LEVEL, &[0x3A]),
    InitCommand::new(reg::CONTRAST_A, &[0x91]),
    InitCommand::new(reg::CONTRAST_B, &[0x50]),
    InitCommand::new(reg::CONTRAST_C, &[0x7D]),
    InitCommand::bare(reg::DISPLAY_ON),
];

/// SSD1331 profile
pub const SSD1331: ControllerProfile = ControllerProfile {
    name: "SSD1331",
    column_set: Some(reg::SET_COLUMN),
    row_set: Some(reg::SET_ROW),
    ram_write: None,
    ram_read: None,
    init: INIT,
    post_init: PostInit::None,
    pixel_encoding: PixelEncoding::Rgb565Be,
    position_encoding: PositionEncoding::U8,
    pixel_decoding: PixelDecoding::Rgb888,
    parameter_mode: ParameterMode::Command,
    width: 96,
    height: 64,
    x_offset: 0,
    y_offset: 0,
    vertical_scroll: None,
    default_frequency_hz: 16_000_000,
    max_frequency_hz: UNCAPPED_HZ,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockTransport, Op};
    use crate::Display;
    use rgbdisplay_core::{DisplayConfig, Rgb565};

    #[test]
    fn test_init_in_command_mode() {
        let mut transport = MockTransport::new();
        let mut display =
            Display::new(&mut transport, MockDelay::default(), &SSD1331, DisplayConfig::for_profile(&SSD1331))
                .unwrap();
        display.init().unwrap();
        drop(display);

        assert_eq!(transport.commands().len(), 22);
        assert!(transport.data_writes().is_empty());
        assert_eq!(transport.ops[0], Op::Command(reg::DISPLAY_OFF));
        assert_eq!(transport.ops[1], Op::Command(reg::LOCK));
        assert_eq!(transport.ops[2], Op::CommandParams(vec![0x0B]));
        assert_eq!(transport.ops.last(), Some(&Op::Command(reg::DISPLAY_ON)));
    }

    #[test]
    fn test_fill_has_no_ram_write() {
        let mut transport = MockTransport::new();
        let mut display =
            Display::new(&mut transport, MockDelay::default(), &SSD1331, DisplayConfig::for_profile(&SSD1331))
                .unwrap();
        display.init().unwrap();
        display.fill(Rgb565::GREEN).unwrap();
        drop(display);

        let commands = transport.commands();
        assert_eq!(&commands[commands.len() - 2..], &[reg::SET_COLUMN, reg::SET_ROW]);
        assert!(transport.ops.contains(&Op::CommandParams(vec![0, 95])));
        assert!(transport.ops.contains(&Op::CommandParams(vec![0, 63])));

        // 96 * 64 = 6144 pixels = 24 chunks
        let data = transport.data_writes();
        assert_eq!(data.len(), 24);
        assert_eq!(&data[0][..2], &[0x07, 0xE0]);
    }
}
