//! Text rendering
//!
//! A `GlyphRenderer` draws one line of text with its baseline origin at a
//! given point. The badge uses a small fixed set of faces, selected by
//! [`Font`].

use embedded_graphics::mono_font::iso_8859_1::{FONT_10X20, FONT_7X13, FONT_7X13_BOLD, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use super::RenderError;

/// Preloaded faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Logo face
    ///
    /// The largest mono face is regular weight, so it is overstruck one
    /// pixel to the right to read as bold.
    Bold24,
    /// Headings
    Bold12,
    Bold9,
    Regular9,
}

impl Font {
    /// Backing mono font
    pub fn mono_font(self) -> &'static MonoFont<'static> {
        match self {
            Font::Bold24 => &FONT_10X20,
            Font::Bold12 => &FONT_9X18_BOLD,
            Font::Bold9 => &FONT_7X13_BOLD,
            Font::Regular9 => &FONT_7X13,
        }
    }

    /// Extra passes drawn one pixel further right
    pub fn overstrike(self) -> i32 {
        match self {
            Font::Bold24 => 1,
            _ => 0,
        }
    }

    /// Horizontal advance per character, spacing included
    pub fn advance(self) -> u32 {
        let font = self.mono_font();
        font.character_size.width + font.character_spacing
    }
}

/// Clockwise rotation of a text line about its baseline origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextRotation {
    #[default]
    None,
    Deg90,
    Deg180,
    Deg270,
}

impl TextRotation {
    fn inverse(self) -> Self {
        match self {
            TextRotation::None => TextRotation::None,
            TextRotation::Deg90 => TextRotation::Deg270,
            TextRotation::Deg180 => TextRotation::Deg180,
            TextRotation::Deg270 => TextRotation::Deg90,
        }
    }

    /// Rotate `point` about `pivot` (y axis points down)
    pub fn apply(self, point: Point, pivot: Point) -> Point {
        let d = point - pivot;
        let r = match self {
            TextRotation::None => d,
            TextRotation::Deg90 => Point::new(-d.y, d.x),
            TextRotation::Deg180 => Point::new(-d.x, -d.y),
            TextRotation::Deg270 => Point::new(d.y, -d.x),
        };
        pivot + r
    }
}

/// Draw target adapter that rotates every pixel about a pivot
///
/// Pixels that land outside the wrapped target after rotation are dropped.
pub struct Rotated<'a, D> {
    inner: &'a mut D,
    pivot: Point,
    rotation: TextRotation,
}

impl<'a, D> Rotated<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(inner: &'a mut D, pivot: Point, rotation: TextRotation) -> Self {
        Self {
            inner,
            pivot,
            rotation,
        }
    }
}

impl<D> Dimensions for Rotated<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn bounding_box(&self) -> Rectangle {
        let inner = self.inner.bounding_box();
        let Some(bottom_right) = inner.bottom_right() else {
            return inner;
        };
        let inverse = self.rotation.inverse();
        Rectangle::with_corners(
            inverse.apply(inner.top_left, self.pivot),
            inverse.apply(bottom_right, self.pivot),
        )
    }
}

impl<D> DrawTarget for Rotated<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.inner.bounding_box();
        let pivot = self.pivot;
        let rotation = self.rotation;

        self.inner.draw_iter(
            pixels
                .into_iter()
                .map(|Pixel(point, color)| Pixel(rotation.apply(point, pivot), color))
                .filter(|Pixel(point, _)| bounds.contains(*point)),
        )
    }
}

/// Font rasterizer boundary
pub trait GlyphRenderer {
    /// Draw `text` with its baseline origin at `baseline`
    fn write_line<D>(
        &mut self,
        target: &mut D,
        font: Font,
        baseline: Point,
        text: &str,
        color: BinaryColor,
    ) -> Result<(), RenderError>
    where
        D: DrawTarget<Color = BinaryColor>;

    /// Draw `text` rotated clockwise about its baseline origin
    fn write_line_rotated<D>(
        &mut self,
        target: &mut D,
        font: Font,
        baseline: Point,
        text: &str,
        color: BinaryColor,
        rotation: TextRotation,
    ) -> Result<(), RenderError>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let mut rotated = Rotated::new(target, baseline, rotation);
        self.write_line(&mut rotated, font, baseline, text, color)
    }
}

/// Glyph renderer over the `embedded-graphics` mono fonts
///
/// Characters outside ISO-8859-1 are drawn as the font's replacement glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoGlyphs;

impl MonoGlyphs {
    pub const fn new() -> Self {
        Self
    }
}

impl GlyphRenderer for MonoGlyphs {
    fn write_line<D>(
        &mut self,
        target: &mut D,
        font: Font,
        baseline: Point,
        text: &str,
        color: BinaryColor,
    ) -> Result<(), RenderError>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let bounds = target.bounding_box();
        let mut clipped = target.clipped(&bounds);
        let style = MonoTextStyle::new(font.mono_font(), color);

        for dx in 0..=font.overstrike() {
            Text::with_baseline(text, baseline + Point::new(dx, 0), style, Baseline::Alphabetic)
                .draw(&mut clipped)
                .map_err(|_| RenderError::Draw)?;
        }
        Ok(())
    }
}
