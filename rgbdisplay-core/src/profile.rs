//! Controller profiles
//!
//! A profile is the static description of one controller model: the opcodes
//! of its addressing protocol, the register writes that bring it up, and the
//! defaults of the panels it usually ships on. Profiles are `const` values;
//! the engine in `rgbdisplay-drivers` interprets them.

use heapless::Vec;
use rgbdisplay_hal::{Mode, SpiConfig, MODE_0};

use crate::color::{PixelDecoding, PixelEncoding};

/// One entry of an initialization sequence
///
/// The opcode is sent first, then the payload (if any), then the engine
/// waits `delay_ms` before the next entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitCommand {
    pub opcode: u8,
    pub payload: &'static [u8],
    pub delay_ms: u32,
}

impl InitCommand {
    /// Opcode with parameter bytes
    pub const fn new(opcode: u8, payload: &'static [u8]) -> Self {
        Self {
            opcode,
            payload,
            delay_ms: 0,
        }
    }

    /// Opcode without parameters
    pub const fn bare(opcode: u8) -> Self {
        Self::new(opcode, &[])
    }

    /// Wait `ms` milliseconds after this entry
    pub const fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }
}

/// How the column/row window is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositionEncoding {
    /// Two big-endian 16-bit values (">HH")
    U16Be,
    /// Two 8-bit values (">BB"), small OLED controllers
    U8,
}

impl PositionEncoding {
    /// Largest coordinate that can be encoded
    pub const fn max_coordinate(self) -> u16 {
        match self {
            PositionEncoding::U16Be => u16::MAX,
            PositionEncoding::U8 => u8::MAX as u16,
        }
    }

    /// Encode a `start..=end` span
    ///
    /// Values above [`max_coordinate`](Self::max_coordinate) are truncated;
    /// the engine rejects such geometry when the display is created.
    pub fn encode(self, start: u16, end: u16) -> Vec<u8, 4> {
        match self {
            PositionEncoding::U16Be => {
                let [s_hi, s_lo] = start.to_be_bytes();
                let [e_hi, e_lo] = end.to_be_bytes();
                Vec::from_iter([s_hi, s_lo, e_hi, e_lo])
            }
            PositionEncoding::U8 => Vec::from_iter([start as u8, end as u8]),
        }
    }
}

/// Where command parameters travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterMode {
    /// Parameters follow the opcode as data (D/C high)
    Data,
    /// Parameters are sent as further command bytes (D/C low)
    Command,
}

/// Extra writes issued after the init table
///
/// These depend on the configured panel size and options, so they cannot be
/// part of the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PostInit {
    /// Nothing beyond the init table
    None,
    /// Column/row window `0..=size-1` (offsets ignored), normal mode, display
    /// on; then MADCTL `0xC0` when BGR is configured and INVON when inversion
    /// is configured
    PanelWindow,
    /// Column/row window `offset..=size+offset`, inversion on, normal mode,
    /// display on, MADCTL `0xC0`
    OffsetWindow,
}

/// Static description of a display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerProfile {
    /// Controller name for logs
    pub name: &'static str,
    /// Column address set opcode
    pub column_set: Option<u8>,
    /// Row (page) address set opcode
    pub row_set: Option<u8>,
    /// Memory write opcode; `None` when pixel data follows the window directly
    pub ram_write: Option<u8>,
    /// Memory read opcode; `None` when the controller cannot be read back
    pub ram_read: Option<u8>,
    /// Initialization sequence, replayed in order
    pub init: &'static [InitCommand],
    /// Writes issued after the init sequence
    pub post_init: PostInit,
    /// Pixel format on writes
    pub pixel_encoding: PixelEncoding,
    /// Window coordinate format
    pub position_encoding: PositionEncoding,
    /// Pixel format on reads
    pub pixel_decoding: PixelDecoding,
    /// Where init parameters travel
    pub parameter_mode: ParameterMode,
    /// Default panel width in pixels
    pub width: u16,
    /// Default panel height in pixels
    pub height: u16,
    /// Default column offset into controller RAM
    pub x_offset: u16,
    /// Default row offset into controller RAM
    pub y_offset: u16,
    /// Vertical scroll start address opcode, if supported
    pub vertical_scroll: Option<u8>,
    /// Bus clock used when the application does not pick one
    pub default_frequency_hz: u32,
    /// Fastest bus clock the controller accepts
    pub max_frequency_hz: u32,
}

impl ControllerProfile {
    /// Bus settings for this controller
    ///
    /// `frequency` overrides the profile default but is still capped at the
    /// controller maximum. `mode` defaults to SPI mode 0; some breakouts
    /// wire the controller for mode 3.
    pub fn spi_config(&self, frequency: Option<u32>, mode: Option<Mode>) -> SpiConfig {
        SpiConfig::new(frequency.unwrap_or(self.default_frequency_hz))
            .capped(self.max_frequency_hz)
            .with_mode(mode.unwrap_or(MODE_0))
    }

    /// Whether the window can be programmed at all
    pub const fn is_addressable(&self) -> bool {
        self.column_set.is_some() && self.row_set.is_some()
    }

    /// Whether pixels can be read back
    pub const fn supports_read(&self) -> bool {
        self.ram_read.is_some()
    }
}
