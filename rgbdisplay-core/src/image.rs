//! Image preparation
//!
//! Turns a decoded RGB888 image into the byte stream a controller expects on
//! a RAM write, rotating it first so that it appears upright on a panel
//! mounted at the configured rotation. Rotation is counter-clockwise and
//! expanding: a 90 or 270 degree turn swaps width and height.
//!
//! Decoding image files is left to the application; anything that yields
//! packed `[r, g, b]` bytes row by row works as a source.

use crate::color::{PixelEncoding, Rgb565};
use crate::error::ImageError;
use crate::geometry::Rotation;

/// Size of `width` x `height` after rotation
pub const fn rotated_size(width: u16, height: u16, rotation: Rotation) -> (u16, u16) {
    if rotation.is_transposed() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Bytes needed to hold an encoded `width` x `height` image
pub const fn encoded_len(width: u16, height: u16, encoding: PixelEncoding) -> usize {
    width as usize * height as usize * encoding.byte_width()
}

/// Rotate and encode a packed RGB888 image into `out`
///
/// `src` holds `width * height` pixels of three bytes each, row-major.
/// Returns the dimensions of the rotated image; `out` is filled row-major in
/// those dimensions, starting at index 0.
pub fn encode_rgb888(
    src: &[u8],
    width: u16,
    height: u16,
    rotation: Rotation,
    encoding: PixelEncoding,
    out: &mut [u8],
) -> Result<(u16, u16), ImageError> {
    let w = usize::from(width);
    let h = usize::from(height);
    if src.len() != w * h * 3 {
        return Err(ImageError::SourceSize);
    }

    let bpp = encoding.byte_width();
    if out.len() < w * h * bpp {
        return Err(ImageError::BufferTooSmall);
    }

    let (out_w, out_h) = rotated_size(width, height, rotation);
    let out_w = usize::from(out_w);

    for (index, dst) in out.chunks_exact_mut(bpp).take(w * h).enumerate() {
        let i = index % out_w;
        let j = index / out_w;

        let (x, y) = match rotation {
            Rotation::Deg0 => (i, j),
            Rotation::Deg90 => (w - 1 - j, i),
            Rotation::Deg180 => (w - 1 - i, h - 1 - j),
            Rotation::Deg270 => (j, h - 1 - i),
        };

        let s = (y * w + x) * 3;
        let color = Rgb565::new(src[s], src[s + 1], src[s + 2]);
        dst.copy_from_slice(&encoding.encode(color)[..bpp]);
    }

    Ok((out_w as u16, out_h))
}
