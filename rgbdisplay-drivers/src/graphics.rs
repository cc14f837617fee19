//! embedded-graphics support
//!
//! Lets any [`Display`] be used as a `DrawTarget`. Single pixels map to
//! [`Display::write_pixel`], so anything drawn off the panel is dropped.
//! Solid fills are clipped to the panel before they reach
//! [`Display::fill_rectangle`], which would otherwise clamp an off-panel
//! area onto the edge.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565 as EgRgb565};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;
use embedded_hal::delay::DelayNs;
use rgbdisplay_core::{Error, Rgb565};
use rgbdisplay_hal::Transport;

use crate::Display;

/// Both types store the same 5-6-5 bit layout
fn convert(color: EgRgb565) -> Rgb565 {
    Rgb565(color.into_storage())
}

impl<T, D> OriginDimensions for Display<T, D>
where
    T: Transport,
    D: DelayNs,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<T, D> DrawTarget for Display<T, D>
where
    T: Transport,
    D: DelayNs,
{
    type Color = EgRgb565;
    type Error = Error<T::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.write_pixel(point.x, point.y, convert(color))?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }

        // Clipped to the panel, so the size fits in i32
        self.fill_rectangle(
            area.top_left.x,
            area.top_left.y,
            area.size.width as i32,
            area.size.height as i32,
            convert(color),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(convert(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::ILI9341;
    use crate::mock::{MockDelay, MockTransport, Op};
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::PrimitiveStyle;
    use rgbdisplay_core::dcs::{CASET, DISPON, RAMWR, RASET};
    use rgbdisplay_core::DisplayConfig;

    fn ready(transport: &mut MockTransport) -> Display<&mut MockTransport, MockDelay> {
        let mut display =
            Display::new(transport, MockDelay::default(), &ILI9341, DisplayConfig::for_profile(&ILI9341)).unwrap();
        display.init().unwrap();
        display
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(convert(EgRgb565::RED), Rgb565::RED);
        assert_eq!(convert(EgRgb565::new(0, 63, 0)), Rgb565::GREEN);
        assert_eq!(convert(EgRgb565::BLUE), Rgb565::BLUE);
    }

    #[test]
    fn test_size() {
        let mut transport = MockTransport::new();
        let display = ready(&mut transport);
        assert_eq!(display.size(), Size::new(240, 320));
    }

    #[test]
    fn test_pixels_off_panel_dropped() {
        let mut transport = MockTransport::new();
        let mut display = ready(&mut transport);

        let pixels = [
            Pixel(Point::new(-1, 0), EgRgb565::RED),
            Pixel(Point::new(240, 0), EgRgb565::RED),
            Pixel(Point::new(5, 6), EgRgb565::RED),
        ];
        display.draw_iter(pixels).unwrap();
        drop(display);

        let tail = &transport.ops[transport.ops.len() - 6..];
        assert_eq!(
            tail,
            &[
                Op::Command(CASET),
                Op::Data(vec![0x00, 5, 0x00, 5]),
                Op::Command(RASET),
                Op::Data(vec![0x00, 6, 0x00, 6]),
                Op::Command(RAMWR),
                Op::Data(vec![0xF8, 0x00]),
            ]
        );
        assert_eq!(transport.commands().iter().filter(|&&c| c == RAMWR).count(), 1);
    }

    #[test]
    fn test_filled_rectangle_is_clipped() {
        let mut transport = MockTransport::new();
        let mut display = ready(&mut transport);

        Rectangle::new(Point::new(230, -10), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(EgRgb565::BLUE))
            .draw(&mut display)
            .unwrap();
        drop(display);

        let data = transport.data_writes();
        let n = data.len();
        assert_eq!(data[n - 3], &[0x00, 230, 0x00, 239]);
        assert_eq!(data[n - 2], &[0x00, 0, 0x00, 9]);
        assert_eq!(data[n - 1].len(), 10 * 10 * 2);
    }

    #[test]
    fn test_fill_entirely_off_panel() {
        let mut transport = MockTransport::new();
        let mut display = ready(&mut transport);
        let area = Rectangle::new(Point::new(300, 400), Size::new(5, 5));
        display.fill_solid(&area, EgRgb565::GREEN).unwrap();
        drop(display);

        // Nothing after the init table
        assert_eq!(transport.ops.last(), Some(&Op::Command(DISPON)));
    }

    #[test]
    fn test_clear() {
        let mut transport = MockTransport::new();
        let mut display = ready(&mut transport);
        display.clear(EgRgb565::WHITE).unwrap();
        drop(display);

        let data = transport.data_writes();
        let n = data.len();
        assert_eq!(data[n - 1], &[0xFF; 512][..]);
        assert_eq!(n, 19 + 2 + 300);
    }
}
