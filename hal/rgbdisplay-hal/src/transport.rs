//! Display bus transport
//!
//! Every controller handled by this workspace speaks the same framing: a
//! one-byte opcode sent with the D/C line low, followed by parameter or pixel
//! bytes sent with D/C high. [`Transport`] captures that framing; each method
//! is one scoped bus acquisition (chip select asserted on entry and released
//! on exit, including on error).
//!
//! # Framing
//!
//! ```text
//!  D/C  ‾‾‾‾\________/‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
//!  CS   ‾‾‾‾\________/‾‾‾‾\____________/‾‾‾‾‾
//!  MOSI      [opcode]      [data ... data]
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, ErrorKind, OutputPin};
use embedded_hal::spi::{Operation, SpiDevice};

/// Reset pulse hold time in milliseconds (low phase and high phase)
pub const RESET_HOLD_MS: u32 = 50;

/// Command/data transport to a display controller
pub trait Transport {
    /// Error type for bus operations
    type Error: core::fmt::Debug;

    /// Send a single opcode (D/C low)
    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error>;

    /// Send parameter or pixel bytes (D/C high)
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Send parameter bytes in command mode (D/C low)
    ///
    /// Controllers such as the SSD1331 expect command parameters on the
    /// command channel. The default sends them one opcode at a time.
    fn write_command_params(&mut self, params: &[u8]) -> Result<(), Self::Error> {
        for &byte in params {
            self.write_command(byte)?;
        }
        Ok(())
    }

    /// Optionally send `opcode`, then clock `buf.len()` bytes in
    ///
    /// Opcode and read happen within one bus acquisition.
    fn read_data(&mut self, opcode: Option<u8>, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Whether a hardware reset line is connected
    fn has_reset_pin(&self) -> bool;

    /// Pulse the reset line: low for 50 ms, then high for 50 ms
    ///
    /// Does nothing when [`has_reset_pin`](Self::has_reset_pin) is false.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
        T::write_command(self, opcode)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_data(self, data)
    }

    fn write_command_params(&mut self, params: &[u8]) -> Result<(), Self::Error> {
        T::write_command_params(self, params)
    }

    fn read_data(&mut self, opcode: Option<u8>, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read_data(self, opcode, buf)
    }

    fn has_reset_pin(&self) -> bool {
        T::has_reset_pin(self)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        T::reset(self, delay)
    }
}

/// Errors raised by [`SpiTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiTransportError<S> {
    /// SPI bus error
    Spi(S),
    /// D/C or reset pin error
    Pin(ErrorKind),
}

/// 4-wire SPI transport (SCK/MOSI/MISO + CS, with a separate D/C line)
///
/// Chip select is owned by the `SpiDevice`, so every call below is exactly
/// one transaction on the bus.
pub struct SpiTransport<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: Option<RST>,
}

impl<SPI, DC, RST> SpiTransport<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a transport; `rst` may be `None` when the reset line is not wired
    pub fn new(spi: SPI, dc: DC, rst: Option<RST>) -> Self {
        Self { spi, dc, rst }
    }

    /// Give back the SPI device and pins
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }

    fn command_mode(&mut self) -> Result<(), SpiTransportError<SPI::Error>> {
        self.dc
            .set_low()
            .map_err(|e| SpiTransportError::Pin(e.kind()))
    }

    fn data_mode(&mut self) -> Result<(), SpiTransportError<SPI::Error>> {
        self.dc
            .set_high()
            .map_err(|e| SpiTransportError::Pin(e.kind()))
    }
}

impl<SPI, DC, RST> Transport for SpiTransport<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = SpiTransportError<SPI::Error>;

    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
        self.command_mode()?;
        self.spi.write(&[opcode]).map_err(SpiTransportError::Spi)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.data_mode()?;
        self.spi.write(data).map_err(SpiTransportError::Spi)
    }

    fn write_command_params(&mut self, params: &[u8]) -> Result<(), Self::Error> {
        if params.is_empty() {
            return Ok(());
        }
        self.command_mode()?;
        self.spi.write(params).map_err(SpiTransportError::Spi)
    }

    fn read_data(&mut self, opcode: Option<u8>, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.command_mode()?;
        let result = match opcode {
            Some(opcode) => {
                let command = [opcode];
                self.spi
                    .transaction(&mut [Operation::Write(&command), Operation::Read(buf)])
            }
            None => self.spi.read(buf),
        };
        result.map_err(SpiTransportError::Spi)
    }

    fn has_reset_pin(&self) -> bool {
        self.rst.is_some()
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };

        rst.set_low().map_err(|e| SpiTransportError::Pin(e.kind()))?;
        delay.delay_ms(RESET_HOLD_MS);
        rst.set_high().map_err(|e| SpiTransportError::Pin(e.kind()))?;
        delay.delay_ms(RESET_HOLD_MS);
        Ok(())
    }
}
