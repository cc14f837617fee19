//! ILI9341 / ILI9340
//!
//! 240x320 TFT controller. The only profile with hardware vertical scrolling
//! (see [`Display::scroll_by`](crate::Display::scroll_by)).

use rgbdisplay_core::dcs::{CASET, COLMOD, DISPON, GAMSET, MADCTL, RAMRD, RAMWR, RASET, SLPOUT, VSCRSADD};
use rgbdisplay_core::{
    ControllerProfile, InitCommand, ParameterMode, PixelDecoding, PixelEncoding, PositionEncoding, PostInit,
};

use super::{SLPOUT_DELAY_MS, UNCAPPED_HZ};

/// Manufacturer registers
pub mod reg {
    /// Frame rate control (normal mode)
    pub const FRMCTR1: u8 = 0xB1;
    /// Display function control
    pub const DFUNCTR: u8 = 0xB6;
    /// Power control 1
    pub const PWCTR1: u8 = 0xC0;
    /// Power control 2
    pub const PWCTR2: u8 = 0xC1;
    /// VCOM control 1
    pub const VMCTR1: u8 = 0xC5;
    /// VCOM control 2
    pub const VMCTR2: u8 = 0xC7;
    /// Power control A
    pub const PWCTRA: u8 = 0xCB;
    /// Power control B
    pub const PWCTRB: u8 = 0xCF;
    /// Positive gamma correction
    pub const GMCTRP1: u8 = 0xE0;
    /// Negative gamma correction
    pub const GMCTRN1: u8 = 0xE1;
    /// Driver timing control A
    pub const DTCTRA: u8 = 0xE8;
    /// Driver timing control B
    pub const DTCTRB: u8 = 0xEA;
    /// Power on sequence control
    pub const PWRSEQ: u8 = 0xED;
    /// Undocumented, required by most panels
    pub const UNDOC_EF: u8 = 0xEF;
    /// Enable 3-gamma
    pub const EN3GAM: u8 = 0xF2;
    /// Pump ratio control
    pub const PUMPCTR: u8 = 0xF7;
}

const INIT: &[InitCommand] = &[
    InitCommand::new(reg::UNDOC_EF, &[0x03, 0x80, 0x02]),
    InitCommand::new(reg::PWCTRB, &[0x00, 0xC1, 0x30]),
    InitCommand::new(reg::PWRSEQ, &[0x64, 0x03, 0x12, 0x81]),
    InitCommand::new(reg::DTCTRA, &[0x85, 0x00, 0x78]),
    InitCommand::new(reg::PWCTRA, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    InitCommand::new(reg::PUMPCTR, &[0x20]),
    InitCommand::new(reg::DTCTRB, &[0x00, 0x00]),
    InitCommand::new(reg::PWCTR1, &[0x23]),
    InitCommand::new(reg::PWCTR2, &[0x10]),
    InitCommand::new(reg::VMCTR1, &[0x3E, 0x28]),
    InitCommand::new(reg::VMCTR2, &[0x86]),
    InitCommand::new(MADCTL, &[0x48]),
    InitCommand::new(COLMOD, &[0x55]),
    InitCommand::new(reg::FRMCTR1, &[0x00, 0x18]),
    InitCommand::new(reg::DFUNCTR, &[0x08, 0x82, 0x27]),
    InitCommand::new(reg::EN3GAM, &[0x00]),
    InitCommand::new(GAMSET, &[0x01]),
    InitCommand::new(
        reg::GMCTRP1,
        &[0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09, 0x00],
    ),
    InitCommand::new(
        reg::GMCTRN1,
        &[0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36, 0x0F],
    ),
    InitCommand::bare(SLPOUT).delay(SLPOUT_DELAY_MS),
    InitCommand::bare(DISPON),
];

/// ILI9341 profile
pub const ILI9341: ControllerProfile = ControllerProfile {
    name: "ILI9341",
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
    width: 240,
    height: 320,
    x_offset: 0,
    y_offset: 0,
    vertical_scroll: Some(VSCRSADD),
    default_frequency_hz: 16_000_000,
    max_frequency_hz: UNCAPPED_HZ,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockTransport, Op};
    use crate::Display;
    use rgbdisplay_core::DisplayConfig;

    #[test]
    fn test_init_order() {
        let mut display =
            Display::new(MockTransport::new(), MockDelay::default(), &ILI9341, DisplayConfig::for_profile(&ILI9341))
                .unwrap();
        display.init().unwrap();
        let (transport, delay) = display.release();

        let commands = transport.commands();
        assert_eq!(commands.len(), 21);
        assert_eq!(commands[0], 0xEF);
        assert_eq!(commands[1], 0xCF);
        assert_eq!(commands[19], 0x11);
        assert_eq!(commands[20], 0x29);

        // Each opcode directly followed by its payload
        assert_eq!(transport.ops[0], Op::Command(0xEF));
        assert_eq!(transport.ops[1], Op::Data(vec![0x03, 0x80, 0x02]));
        assert_eq!(transport.ops[2], Op::Command(0xCF));
        assert_eq!(transport.ops.len(), 21 + 19);

        assert_eq!(delay.waits_ms, vec![120]);
    }

    #[test]
    fn test_profile() {
        assert_eq!(ILI9341.vertical_scroll, Some(0x37));
        assert!(ILI9341.supports_read());
        assert_eq!(ILI9341.spi_config(None, None).frequency, 16_000_000);
    }
}
