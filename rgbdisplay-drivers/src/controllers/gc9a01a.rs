//! GC9A01A
//!
//! 240x240 controller driving round panels. Most of its init table writes
//! undocumented registers behind the "inter register enable" unlock pair.

use rgbdisplay_core::dcs::{CASET, COLMOD, DISPON, INVON, MADCTL, NORON, RAMRD, RAMWR, RASET, SLPOUT, TEON};
use rgbdisplay_core::{
    ControllerProfile, InitCommand, ParameterMode, PixelDecoding, PixelEncoding, PositionEncoding, PostInit,
};

use super::{SLPOUT_DELAY_MS, UNCAPPED_HZ};

/// Manufacturer registers
pub mod reg {
    /// Inter register enable 1
    pub const INREGEN1: u8 = 0xFE;
    /// Inter register enable 2
    pub const INREGEN2: u8 = 0xEF;
    /// Display function control
    pub const DFUNCTR: u8 = 0xB6;
    /// Power control 2
    pub const PWCTR2: u8 = 0xC3;
    /// Power control 3
    pub const PWCTR3: u8 = 0xC4;
    /// Power control 4
    pub const PWCTR4: u8 = 0xC9;
    pub const GAMMA1: u8 = 0xF0;
    pub const GAMMA2: u8 = 0xF1;
    pub const GAMMA3: u8 = 0xF2;
    pub const GAMMA4: u8 = 0xF3;
}

/// Settle time after display-on
const DISPON_DELAY_MS: u32 = 20;

const INIT: &[InitCommand] = &[
    InitCommand::bare(reg::INREGEN1),
    InitCommand::bare(reg::INREGEN2),
    InitCommand::new(reg::DFUNCTR, &[0x00, 0x00]),
    // BGR color filter panel
    InitCommand::new(MADCTL, &[0x48]),
    InitCommand::new(COLMOD, &[0x05]),
    InitCommand::new(reg::PWCTR2, &[0x13]),
    InitCommand::new(reg::PWCTR3, &[0x13]),
    InitCommand::new(reg::PWCTR4, &[0x22]),
    InitCommand::new(reg::GAMMA1, &[0x45, 0x09, 0x08, 0x08, 0x26, 0x2A]),
    InitCommand::new(reg::GAMMA2, &[0x43, 0x70, 0x72, 0x36, 0x37, 0x6F]),
    InitCommand::new(reg::GAMMA3, &[0x45, 0x09, 0x08, 0x08, 0x26, 0x2A]),
    InitCommand::new(reg::GAMMA4, &[0x43, 0x70, 0x72, 0x36, 0x37, 0x6F]),
    InitCommand::new(0x66, &[0x3C, 0x00, 0xCD, 0x67, 0x45, 0x45, 0x10, 0x00, 0x00, 0x00]),
    InitCommand::new(0x67, &[0x00, 0x3C, 0x00, 0x00, 0x00, 0x01, 0x54, 0x10, 0x32, 0x98]),
    InitCommand::new(0x74, &[0x10, 0x85, 0x80, 0x00, 0x00, 0x4E, 0x00]),
    InitCommand::new(0x98, &[0x3E, 0x07]),
    InitCommand::bare(TEON),
    InitCommand::bare(INVON),
    InitCommand::bare(SLPOUT).delay(SLPOUT_DELAY_MS),
    InitCommand::bare(NORON),
    InitCommand::bare(DISPON).delay(DISPON_DELAY_MS),
];

/// GC9A01A profile
pub const GC9A01A: ControllerProfile = ControllerProfile {
    name: "GC9A01A",
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
    height: 240,
    x_offset: 0,
    y_offset: 0,
    vertical_scroll: None,
    default_frequency_hz: 24_000_000,
    max_frequency_hz: UNCAPPED_HZ,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockTransport, Op};
    use crate::Display;
    use rgbdisplay_core::DisplayConfig;

    #[test]
    fn test_init_with_reset() {
        let mut transport = MockTransport::with_reset();
        let mut delay = MockDelay::default();
        let mut display =
            Display::new(&mut transport, &mut delay, &GC9A01A, DisplayConfig::for_profile(&GC9A01A)).unwrap();
        display.init().unwrap();
        drop(display);

        assert_eq!(transport.ops[0], Op::Reset);
        assert_eq!(transport.ops[1], Op::Command(reg::INREGEN1));
        assert_eq!(transport.ops[2], Op::Command(reg::INREGEN2));
        assert_eq!(transport.commands().len(), 21);
        assert_eq!(transport.ops.last(), Some(&Op::Command(DISPON)));
        assert_eq!(delay.waits_ms, vec![50, 50, 120, 20]);
    }

    #[test]
    fn test_default_clock() {
        assert_eq!(GC9A01A.spi_config(None, None).frequency, 24_000_000);
    }
}
