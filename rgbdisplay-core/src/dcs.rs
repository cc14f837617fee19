//! MIPI DCS opcodes
//!
//! Command set shared by the ILI93xx, ST77xx, HX83xx, GC9A01A and S6D02A1
//! families. The SSD13xx OLED controllers use their own opcodes, defined next
//! to their profiles.

pub const NOP: u8 = 0x00;
pub const SWRESET: u8 = 0x01;
pub const SLPIN: u8 = 0x10;
pub const SLPOUT: u8 = 0x11;
pub const PTLON: u8 = 0x12;
pub const NORON: u8 = 0x13;
pub const INVOFF: u8 = 0x20;
pub const INVON: u8 = 0x21;
pub const GAMSET: u8 = 0x26;
pub const DISPOFF: u8 = 0x28;
pub const DISPON: u8 = 0x29;
/// Column address set
pub const CASET: u8 = 0x2A;
/// Row (page) address set
pub const RASET: u8 = 0x2B;
/// Memory write
pub const RAMWR: u8 = 0x2C;
/// Memory read
pub const RAMRD: u8 = 0x2E;
pub const PTLAR: u8 = 0x30;
/// Tearing effect line on
pub const TEON: u8 = 0x35;
/// Memory access control (scan direction, RGB/BGR order)
pub const MADCTL: u8 = 0x36;
/// Vertical scrolling start address
pub const VSCRSADD: u8 = 0x37;
/// Interface pixel format
pub const COLMOD: u8 = 0x3A;
/// Tear scanline
pub const TESCAN: u8 = 0x44;

/// MADCTL value written when BGR order is requested: MY | MX, rotation 0
pub const MADCTL_MY_MX: u8 = 0xC0;
