//! Host-side transport and delay doubles
//!
//! [`MockTransport`] records every call, optionally fails at a given call,
//! and can emulate controller RAM for profiles that use data-mode parameters
//! so that pixels written can be read back.

use embedded_hal::delay::DelayNs;
use rgbdisplay_core::{ControllerProfile, PositionEncoding, Rgb565};
use rgbdisplay_hal::transport::RESET_HOLD_MS;
use rgbdisplay_hal::Transport;

/// One recorded transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Command(u8),
    Data(Vec<u8>),
    CommandParams(Vec<u8>),
    Read(Option<u8>, usize),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Emulated controller RAM
struct Ram {
    profile: &'static ControllerProfile,
    pixels: Vec<Rgb565>,
    stride: usize,
    columns: (usize, usize),
    rows: (usize, usize),
    cursor: usize,
    last_opcode: Option<u8>,
}

impl Ram {
    fn new(profile: &'static ControllerProfile, stride: usize, lines: usize) -> Self {
        Self {
            profile,
            pixels: vec![Rgb565::BLACK; stride * lines],
            stride,
            columns: (0, 0),
            rows: (0, 0),
            cursor: 0,
            last_opcode: None,
        }
    }

    fn span(&self, data: &[u8]) -> (usize, usize) {
        match self.profile.position_encoding {
            PositionEncoding::U16Be => (
                usize::from(u16::from_be_bytes([data[0], data[1]])),
                usize::from(u16::from_be_bytes([data[2], data[3]])),
            ),
            PositionEncoding::U8 => (usize::from(data[0]), usize::from(data[1])),
        }
    }

    fn command(&mut self, opcode: u8) {
        self.last_opcode = Some(opcode);
        if Some(opcode) == self.profile.ram_write {
            self.cursor = 0;
        }
    }

    fn data(&mut self, data: &[u8]) {
        let opcode = self.last_opcode;
        if opcode == self.profile.column_set {
            self.columns = self.span(data);
        } else if opcode == self.profile.row_set {
            self.rows = self.span(data);
        } else if opcode == self.profile.ram_write {
            let width = self.columns.1 - self.columns.0 + 1;
            for px in data.chunks_exact(2) {
                let x = self.columns.0 + self.cursor % width;
                let y = self.rows.0 + self.cursor / width;
                if let Some(slot) = self.pixels.get_mut(y * self.stride + x) {
                    *slot = Rgb565(u16::from_be_bytes([px[0], px[1]]));
                }
                self.cursor += 1;
            }
        }
    }

    fn read(&self, buf: &mut [u8]) {
        let color = self.pixels[self.rows.0 * self.stride + self.columns.0];
        let (r, g, b) = color.to_rgb888();
        buf.copy_from_slice(&[r, g, b][..buf.len()]);
    }
}

/// Recording transport
pub struct MockTransport {
    pub ops: Vec<Op>,
    reset_pin: bool,
    fail_at: Option<usize>,
    ram: Option<Ram>,
}

impl MockTransport {
    /// Transport without a reset line
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            reset_pin: false,
            fail_at: None,
            ram: None,
        }
    }

    /// Transport with a reset line
    pub fn with_reset() -> Self {
        Self {
            reset_pin: true,
            ..Self::new()
        }
    }

    /// Emulate RAM sized for `profile` at its default offsets
    pub fn with_ram(profile: &'static ControllerProfile) -> Self {
        let stride = usize::from(profile.width + profile.x_offset) + 1;
        let lines = usize::from(profile.height + profile.y_offset) + 1;
        Self {
            ram: Some(Ram::new(profile, stride, lines)),
            ..Self::new()
        }
    }

    /// Fail the call with index `index` (counting from 0) and all after it
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Fail the call with index `index` and all after it, counted from the
    /// current log
    pub fn fail_from(&mut self, index: usize) {
        self.fail_at = Some(self.ops.len() + index);
    }

    fn record(&mut self, op: Op) -> Result<(), MockError> {
        if self.fail_at.is_some_and(|at| self.ops.len() >= at) {
            return Err(MockError);
        }
        self.ops.push(op);
        Ok(())
    }

    /// Opcodes sent, in order
    pub fn commands(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Payloads of every data write, in order
    pub fn data_writes(&self) -> Vec<&[u8]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Data(d) => Some(d.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn write_command(&mut self, opcode: u8) -> Result<(), MockError> {
        self.record(Op::Command(opcode))?;
        if let Some(ram) = self.ram.as_mut() {
            ram.command(opcode);
        }
        Ok(())
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), MockError> {
        self.record(Op::Data(data.to_vec()))?;
        if let Some(ram) = self.ram.as_mut() {
            ram.data(data);
        }
        Ok(())
    }

    fn write_command_params(&mut self, params: &[u8]) -> Result<(), MockError> {
        self.record(Op::CommandParams(params.to_vec()))
    }

    fn read_data(&mut self, opcode: Option<u8>, buf: &mut [u8]) -> Result<(), MockError> {
        self.record(Op::Read(opcode, buf.len()))?;
        match self.ram.as_ref() {
            Some(ram) => ram.read(buf),
            None => buf.fill(0),
        }
        Ok(())
    }

    fn has_reset_pin(&self) -> bool {
        self.reset_pin
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), MockError> {
        if !self.reset_pin {
            return Ok(());
        }
        self.record(Op::Reset)?;
        delay.delay_ms(RESET_HOLD_MS);
        delay.delay_ms(RESET_HOLD_MS);
        Ok(())
    }
}

/// Delay that records requested waits instead of sleeping
#[derive(Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

impl MockDelay {
    pub fn total_ms(&self) -> u32 {
        self.waits_ms.iter().sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}
