//! Bitmap blit with a fixed luminance threshold
//!
//! Each source pixel becomes black when `r + g + b` is below half of the
//! maximum channel sum, and erased otherwise. No dithering, no gray.

use embedded_graphics::pixelcolor::{BinaryColor, Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use tinybmp::Bmp;

use super::{DecodeKind, RenderError};

/// Pixels with a channel sum below this render black
pub const LUMINANCE_THRESHOLD: u16 = 128 * 3;

/// Map one RGB pixel onto the two-colour model
pub fn threshold(color: Rgb888) -> BinaryColor {
    let sum = color.r() as u16 + color.g() as u16 + color.b() as u16;
    if sum < LUMINANCE_THRESHOLD {
        BinaryColor::On
    } else {
        BinaryColor::Off
    }
}

/// Threshold decoded pixels onto the target at `origin`
///
/// Pixels that land outside the target are dropped.
pub fn blit_bitmap<D, I>(target: &mut D, pixels: I, origin: Point) -> Result<(), RenderError>
where
    D: DrawTarget<Color = BinaryColor>,
    I: IntoIterator<Item = Pixel<Rgb888>>,
{
    let bounds = target.bounding_box();
    let pixels = pixels
        .into_iter()
        .map(|Pixel(point, color)| Pixel(point + origin, threshold(color)))
        .filter(|Pixel(point, _)| bounds.contains(*point));

    target.draw_iter(pixels).map_err(|_| RenderError::Draw)
}

/// Decode a BMP asset and blit it at `origin`
///
/// On a decode failure the target is left untouched.
pub fn draw_bitmap<D>(target: &mut D, bytes: &[u8], origin: Point) -> Result<Size, RenderError>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let bmp = Bmp::<Rgb888>::from_slice(bytes)
        .map_err(|_| RenderError::AssetDecode(DecodeKind::Bitmap))?;

    blit_bitmap(target, bmp.pixels(), origin)?;
    Ok(bmp.size())
}
