//! RGB565 colors and pixel wire formats
//!
//! Every supported controller stores 16-bit RGB565 pixels and receives them
//! big-endian. Reads come back as three bytes, one per channel, which are
//! quantised through [`color565`] again.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pack 8-bit red, green and blue into RGB565
///
/// Lossy: the low 3/2/3 bits of each channel are dropped.
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// A 16-bit RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);

    /// Quantise an 8-bit-per-channel color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(color565(r, g, b))
    }

    /// Raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel (0-31)
    pub const fn r(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (0-63)
    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0-31)
    pub const fn b(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Expand back to 8 bits per channel (low bits zero)
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        (self.r() << 3, self.g() << 2, self.b() << 3)
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

impl From<(u8, u8, u8)> for Rgb565 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb565 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Pixel encoding on the RAM-write path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelEncoding {
    /// RGB565, big-endian (">H")
    Rgb565Be,
}

impl PixelEncoding {
    /// Largest encoded pixel of any variant
    pub const MAX_BYTES: usize = 2;

    /// Bytes per encoded pixel
    pub const fn byte_width(self) -> usize {
        match self {
            PixelEncoding::Rgb565Be => 2,
        }
    }

    /// Encode one pixel
    pub const fn encode(self, color: Rgb565) -> [u8; Self::MAX_BYTES] {
        match self {
            PixelEncoding::Rgb565Be => color.0.to_be_bytes(),
        }
    }
}

/// Pixel decoding on the RAM-read path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelDecoding {
    /// One byte per channel (">BBB")
    Rgb888,
}

impl PixelDecoding {
    /// Largest decoded pixel of any variant
    pub const MAX_BYTES: usize = 3;

    /// Bytes read per pixel
    pub const fn byte_width(self) -> usize {
        match self {
            PixelDecoding::Rgb888 => 3,
        }
    }

    /// Decode the bytes of one pixel
    ///
    /// `data` must hold at least [`byte_width`](Self::byte_width) bytes.
    pub fn decode(self, data: &[u8]) -> Rgb565 {
        match self {
            PixelDecoding::Rgb888 => Rgb565::new(data[0], data[1], data[2]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color565_primaries() {
        assert_eq!(color565(0xFF, 0, 0), 0xF800);
        assert_eq!(color565(0, 0xFF, 0), 0x07E0);
        assert_eq!(color565(0, 0, 0xFF), 0x001F);
        assert_eq!(color565(0xFF, 0xFF, 0xFF), 0xFFFF);
        assert_eq!(color565(0xFF, 0x11, 0x22), 0xF884);
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        assert_eq!(Rgb565::from((0xFF, 0x11, 0x22)), Rgb565(0xF884));
        assert_eq!(Rgb565::from([0xFF, 0x11, 0x22]), Rgb565(0xF884));
    }

    #[test]
    fn test_channels() {
        let c = Rgb565(0xF884);
        assert_eq!(c.r(), 0x1F);
        assert_eq!(c.g(), 0x04);
        assert_eq!(c.b(), 0x04);
        assert_eq!(c.to_rgb888(), (0xF8, 0x10, 0x20));
    }

    #[test]
    fn test_encode_big_endian() {
        assert_eq!(PixelEncoding::Rgb565Be.encode(Rgb565(0x7521)), [0x75, 0x21]);
        assert_eq!(PixelEncoding::Rgb565Be.byte_width(), 2);
    }

    #[test]
    fn test_decode_rgb888() {
        let c = PixelDecoding::Rgb888.decode(&[0xFF, 0x11, 0x22]);
        assert_eq!(c, Rgb565(0xF884));
    }

    proptest! {
        #[test]
        fn prop_quantised_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let c = Rgb565::new(r, g, b);
            let (r8, g8, b8) = c.to_rgb888();
            // Values already on the 565 grid survive unchanged
            prop_assert_eq!(Rgb565::new(r8, g8, b8), c);
            prop_assert_eq!(PixelDecoding::Rgb888.decode(&[r8, g8, b8]), c);
            // Top bits match the input
            prop_assert_eq!(c.r(), r >> 3);
            prop_assert_eq!(c.g(), g >> 2);
            prop_assert_eq!(c.b(), b >> 3);
        }
    }
}
