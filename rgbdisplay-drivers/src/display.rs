//! Addressing & blit engine
//!
//! [`Display`] drives any controller described by a [`ControllerProfile`]:
//! it replays the profile's init table, programs column/row windows and
//! streams pixel data through a [`Transport`].
//!
//! # Geometry rules
//!
//! - `write_pixel` outside the panel does nothing
//! - `fill_rectangle` clamps its origin onto the panel and its size to at
//!   least one pixel, so it always draws something
//! - `blit_image` is strict: an image that does not fit is rejected before
//!   any bus traffic
//!
//! Rotation only affects [`Display::image`]; pixel and fill coordinates are
//! always in the controller's native orientation.

use embedded_hal::delay::DelayNs;
use rgbdisplay_core::dcs;
use rgbdisplay_core::image::{encode_rgb888, encoded_len, rotated_size};
use rgbdisplay_core::{
    ConfigError, ControllerProfile, DisplayConfig, Error, Lifecycle, LifecycleEvent, Operation, ParameterMode,
    PixelDecoding, PixelEncoding, PostInit, Rectangle, Rgb565, Rotation,
};
use rgbdisplay_hal::Transport;

/// Pixels per transport write when filling
pub const BUFFER_SIZE: usize = 256;

/// Display engine
pub struct Display<T, D> {
    transport: T,
    delay: D,
    profile: &'static ControllerProfile,
    config: DisplayConfig,
    lifecycle: Lifecycle,
    /// Vertical scroll start line
    scroll: u16,
}

impl<T, D> Display<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Create a display
    ///
    /// No bus traffic happens here; call [`init`](Self::init) before drawing.
    pub fn new(
        transport: T,
        delay: D,
        profile: &'static ControllerProfile,
        config: DisplayConfig,
    ) -> Result<Self, Error<T::Error>> {
        config.validate(profile)?;

        Ok(Self {
            transport,
            delay,
            profile,
            config,
            lifecycle: Lifecycle::Uninitialized,
            scroll: 0,
        })
    }

    /// Bring the controller up
    ///
    /// Pulses the reset line when there is one, replays the init table, then
    /// runs the profile's post-init writes. A bus error aborts the sequence
    /// and leaves the display uninitialized; calling `init` again restarts
    /// from the first entry.
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        let result = self.run_init();
        let event = match result {
            Ok(()) => LifecycleEvent::InitComplete,
            Err(_) => LifecycleEvent::InitFailed,
        };
        self.lifecycle = self.lifecycle.transition(event);

        #[cfg(feature = "defmt")]
        match &result {
            Ok(()) => defmt::info!("{}: ready ({}x{})", self.profile.name, self.config.width, self.config.height),
            Err(_) => defmt::warn!("{}: init aborted", self.profile.name),
        }

        result
    }

    fn run_init(&mut self) -> Result<(), Error<T::Error>> {
        if self.transport.has_reset_pin() {
            self.hardware_reset()?;
        }

        let profile = self.profile;
        #[cfg(feature = "defmt")]
        defmt::debug!("{}: {} init commands", profile.name, profile.init.len());

        for entry in profile.init {
            self.command(entry.opcode, entry.payload)?;
            if entry.delay_ms > 0 {
                self.delay.delay_ms(entry.delay_ms);
            }
        }

        self.post_init()
    }

    fn post_init(&mut self) -> Result<(), Error<T::Error>> {
        let (column_set, row_set) = match self.profile.post_init {
            PostInit::None => return Ok(()),
            _ => self.window_opcodes()?,
        };
        let encoding = self.profile.position_encoding;
        let DisplayConfig {
            width,
            height,
            x_offset,
            y_offset,
            bgr,
            invert,
            ..
        } = self.config;

        match self.profile.post_init {
            PostInit::None => {}
            PostInit::PanelWindow => {
                self.command(column_set, &encoding.encode(0, width - 1))?;
                self.command(row_set, &encoding.encode(0, height - 1))?;
                self.command(dcs::NORON, &[])?;
                self.command(dcs::DISPON, &[])?;
                if bgr {
                    self.command(dcs::MADCTL, &[dcs::MADCTL_MY_MX])?;
                }
                if invert {
                    self.command(dcs::INVON, &[])?;
                }
            }
            PostInit::OffsetWindow => {
                self.command(column_set, &encoding.encode(x_offset, width + x_offset))?;
                self.command(row_set, &encoding.encode(y_offset, height + y_offset))?;
                self.command(dcs::INVON, &[])?;
                self.command(dcs::NORON, &[])?;
                self.command(dcs::DISPON, &[])?;
                self.command(dcs::MADCTL, &[dcs::MADCTL_MY_MX])?;
            }
        }
        Ok(())
    }

    /// Pulse the reset line
    ///
    /// The controller loses its configuration; run [`init`](Self::init)
    /// again before drawing.
    pub fn reset(&mut self) -> Result<(), Error<T::Error>> {
        if !self.transport.has_reset_pin() {
            return Err(ConfigError::MissingResetPin.into());
        }
        self.hardware_reset()
    }

    fn hardware_reset(&mut self) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("{}: hardware reset", self.profile.name);

        self.lifecycle = self.lifecycle.transition(LifecycleEvent::Reset);
        self.scroll = 0;
        self.transport.reset(&mut self.delay).map_err(Error::Transport)
    }

    /// Opcode followed by its parameters
    fn command(&mut self, opcode: u8, params: &[u8]) -> Result<(), Error<T::Error>> {
        self.transport.write_command(opcode).map_err(Error::Transport)?;
        if params.is_empty() {
            return Ok(());
        }
        match self.profile.parameter_mode {
            ParameterMode::Data => self.transport.write_data(params),
            ParameterMode::Command => self.transport.write_command_params(params),
        }
        .map_err(Error::Transport)
    }

    fn ensure_ready(&self) -> Result<(), Error<T::Error>> {
        if self.lifecycle.is_ready() {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn window_opcodes(&self) -> Result<(u8, u8), Error<T::Error>> {
        match (self.profile.column_set, self.profile.row_set) {
            (Some(column_set), Some(row_set)) => Ok((column_set, row_set)),
            _ => Err(Error::Unsupported(Operation::AddressWindow)),
        }
    }

    fn window(&mut self, area: Rectangle) -> Result<(), Error<T::Error>> {
        let (column_set, row_set) = self.window_opcodes()?;
        let encoding = self.profile.position_encoding;
        let (x_offset, y_offset) = self.offsets();

        let columns = encoding.encode(area.x0 + x_offset, area.x1 + x_offset);
        self.command(column_set, &columns)?;
        let rows = encoding.encode(area.y0 + y_offset, area.y1 + y_offset);
        self.command(row_set, &rows)
    }

    fn begin_write(&mut self) -> Result<(), Error<T::Error>> {
        match self.profile.ram_write {
            Some(opcode) => self.transport.write_command(opcode).map_err(Error::Transport),
            None => Ok(()),
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        (0..i32::from(self.config.width)).contains(&x) && (0..i32::from(self.config.height)).contains(&y)
    }

    /// Program the column/row window `(x0, y0)..=(x1, y1)`
    ///
    /// Coordinates are panel-relative; the configured offsets are added.
    /// The window must be ordered and lie on the panel.
    pub fn set_address_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        if x0 > x1 || y0 > y1 || x1 >= self.config.width || y1 >= self.config.height {
            return Err(Error::OutOfBounds);
        }
        self.window(Rectangle { x0, y0, x1, y1 })
    }

    /// Read one pixel back
    pub fn read_pixel(&mut self, x: i32, y: i32) -> Result<Rgb565, Error<T::Error>> {
        self.ensure_ready()?;
        let ram_read = self.profile.ram_read.ok_or(Error::Unsupported(Operation::ReadPixel))?;
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds);
        }

        self.window(Rectangle::point(x as u16, y as u16))?;

        let decoding = self.profile.pixel_decoding;
        let mut buf = [0u8; PixelDecoding::MAX_BYTES];
        let buf = &mut buf[..decoding.byte_width()];
        self.transport.read_data(Some(ram_read), buf).map_err(Error::Transport)?;
        Ok(decoding.decode(buf))
    }

    /// Write one pixel; ignored outside the panel
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Rgb565) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        if !self.contains(x, y) {
            return Ok(());
        }

        self.window(Rectangle::point(x as u16, y as u16))?;
        self.begin_write()?;

        let encoding = self.profile.pixel_encoding;
        let bytes = encoding.encode(color);
        self.transport
            .write_data(&bytes[..encoding.byte_width()])
            .map_err(Error::Transport)
    }

    /// Read the pixel at `(x, y)` when `color` is `None`, write it otherwise
    ///
    /// Returns the color read, or `None` after a write.
    pub fn pixel(&mut self, x: i32, y: i32, color: Option<Rgb565>) -> Result<Option<Rgb565>, Error<T::Error>> {
        match color {
            Some(color) => self.write_pixel(x, y, color).map(|()| None),
            None => self.read_pixel(x, y).map(Some),
        }
    }

    /// Fill a rectangle, clamped onto the panel
    pub fn fill_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        let area = Rectangle::clamped(x, y, w, h, self.config.width, self.config.height);

        self.window(area)?;
        self.begin_write()?;

        let encoding = self.profile.pixel_encoding;
        let bpp = encoding.byte_width();
        let pixel = encoding.encode(color);

        let mut chunk = [0u8; BUFFER_SIZE * PixelEncoding::MAX_BYTES];
        let chunk = &mut chunk[..BUFFER_SIZE * bpp];
        for slot in chunk.chunks_exact_mut(bpp) {
            slot.copy_from_slice(&pixel[..bpp]);
        }

        let pixels = area.area();
        for _ in 0..pixels / BUFFER_SIZE {
            self.transport.write_data(chunk).map_err(Error::Transport)?;
        }
        let rest = pixels % BUFFER_SIZE;
        if rest > 0 {
            self.transport.write_data(&chunk[..rest * bpp]).map_err(Error::Transport)?;
        }
        Ok(())
    }

    /// Fill the whole panel
    pub fn fill(&mut self, color: Rgb565) -> Result<(), Error<T::Error>> {
        self.fill_rectangle(0, 0, i32::from(self.config.width), i32::from(self.config.height), color)
    }

    /// Horizontal line of `width` pixels
    pub fn hline(&mut self, x: i32, y: i32, width: i32, color: Rgb565) -> Result<(), Error<T::Error>> {
        self.fill_rectangle(x, y, width, 1, color)
    }

    /// Vertical line of `height` pixels
    pub fn vline(&mut self, x: i32, y: i32, height: i32, color: Rgb565) -> Result<(), Error<T::Error>> {
        self.fill_rectangle(x, y, 1, height, color)
    }

    /// Write pre-encoded pixels to a `w` x `h` region at `(x, y)`
    ///
    /// `pixels` must hold exactly `w * h` pixels in the profile's encoding.
    /// The whole buffer goes out in one transport write.
    pub fn blit_image(&mut self, pixels: &[u8], x: u16, y: u16, w: u16, h: u16) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        if u32::from(x) + u32::from(w) > u32::from(self.config.width)
            || u32::from(y) + u32::from(h) > u32::from(self.config.height)
        {
            return Err(Error::OutOfBounds);
        }
        if pixels.len() != encoded_len(w, h, self.profile.pixel_encoding) {
            return Err(Error::BufferSize);
        }
        if w == 0 || h == 0 {
            return Ok(());
        }

        self.window(Rectangle {
            x0: x,
            y0: y,
            x1: x + w - 1,
            y1: y + h - 1,
        })?;
        self.begin_write()?;
        self.transport.write_data(pixels).map_err(Error::Transport)
    }

    /// Rotate, encode and blit a packed RGB888 image
    ///
    /// The image is turned by the configured rotation first, so `(x, y)` is
    /// the origin of the rotated image. `scratch` receives the encoded pixels
    /// and must hold at least `width * height * 2` bytes.
    pub fn image(
        &mut self,
        rgb888: &[u8],
        width: u16,
        height: u16,
        x: u16,
        y: u16,
        scratch: &mut [u8],
    ) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        let rotation = self.config.rotation;
        let (w, h) = rotated_size(width, height, rotation);
        if u32::from(x) + u32::from(w) > u32::from(self.config.width)
            || u32::from(y) + u32::from(h) > u32::from(self.config.height)
        {
            return Err(Error::OutOfBounds);
        }

        let encoding = self.profile.pixel_encoding;
        let (w, h) = encode_rgb888(rgb888, width, height, rotation, encoding, scratch)?;
        self.blit_image(&scratch[..encoded_len(w, h, encoding)], x, y, w, h)
    }

    /// Move the vertical scroll start by `dy` lines, wrapping at the height
    pub fn scroll_by(&mut self, dy: i32) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        let opcode = self.profile.vertical_scroll.ok_or(Error::Unsupported(Operation::Scroll))?;

        let height = i64::from(self.config.height);
        // rem_euclid keeps the result in 0..height, so the cast is lossless
        self.scroll = (i64::from(self.scroll) + i64::from(dy)).rem_euclid(height) as u16;

        let line = self.scroll.to_be_bytes();
        self.command(opcode, &line)
    }

    /// Current vertical scroll start line
    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    /// Rotation applied by [`image`](Self::image)
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Set the rotation in degrees (0, 90, 180 or 270)
    pub fn set_rotation(&mut self, degrees: u16) -> Result<(), Error<T::Error>> {
        self.config.rotation = Rotation::from_degrees(degrees)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: rotation {}", self.profile.name, degrees);

        Ok(())
    }

    /// Visible width in pixels
    pub fn width(&self) -> u16 {
        self.config.width
    }

    /// Visible height in pixels
    pub fn height(&self) -> u16 {
        self.config.height
    }

    /// Column and row offsets into controller RAM
    pub fn offsets(&self) -> (u16, u16) {
        (self.config.x_offset, self.config.y_offset)
    }

    /// Controller profile in use
    pub fn profile(&self) -> &'static ControllerProfile {
        self.profile
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Whether `init` has completed since creation or the last reset
    pub fn is_ready(&self) -> bool {
        self.lifecycle.is_ready()
    }

    /// Give back the transport and delay
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }
}
