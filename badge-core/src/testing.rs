//! Host-side doubles for the hardware and asset boundaries

extern crate std;

use std::string::String;
use std::vec;
use std::vec::Vec;

use embedded_graphics::pixelcolor::{BinaryColor, Rgb888, RgbColor};
use embedded_graphics::prelude::*;

use crate::assets::{AssetError, AssetStore};
use crate::render::{Font, GlyphRenderer, RenderError, TextRotation};
use crate::traits::{Canvas, DisplayConfig, DisplayError, Indicator};

/// Canvas-level operations, in call order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasOp {
    Configure,
    ClearBuffer,
    ClearDisplay,
    Present,
}

/// In-memory canvas that records every write
///
/// `pixel` returns `None` for pixels not written since the last clear.
pub struct RecordingCanvas {
    size: Size,
    pixels: Vec<Option<BinaryColor>>,
    writes: usize,
    out_of_bounds: usize,
    ops: Vec<CanvasOp>,
    config: Option<DisplayConfig>,
    fail_present: bool,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![None; (width * height) as usize],
            writes: 0,
            out_of_bounds: 0,
            ops: Vec::new(),
            config: None,
            fail_present: false,
        }
    }

    /// Make every `present` fail with a communication error
    pub fn failing_present(mut self) -> Self {
        self.fail_present = true;
        self
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<BinaryColor> {
        self.index(Point::new(x, y)).and_then(|i| self.pixels[i])
    }

    /// In-bounds pixel writes since construction
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Writes that fell outside the canvas
    pub fn out_of_bounds(&self) -> usize {
        self.out_of_bounds
    }

    pub fn count(&self, color: BinaryColor) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    /// Points currently black
    pub fn on_pixels(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.size.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == Some(BinaryColor::On))
            .map(move |(i, _)| Point::new((i % width) as i32, (i / width) as i32))
    }

    pub fn snapshot(&self) -> Vec<Option<BinaryColor>> {
        self.pixels.clone()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn presents(&self) -> usize {
        self.ops.iter().filter(|op| **op == CanvasOp::Present).count()
    }

    pub fn config(&self) -> Option<DisplayConfig> {
        self.config
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        if point.x < 0 || point.y < 0 || point.x >= w || point.y >= h {
            return None;
        }
        Some((point.y * w + point.x) as usize)
    }
}

impl OriginDimensions for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for RecordingCanvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            match self.index(point) {
                Some(i) => {
                    self.pixels[i] = Some(color);
                    self.writes += 1;
                }
                None => self.out_of_bounds += 1,
            }
        }
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn configure(&mut self, config: &DisplayConfig) -> Result<(), DisplayError> {
        self.config = Some(*config);
        self.ops.push(CanvasOp::Configure);
        Ok(())
    }

    fn clear_buffer(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = None);
        self.ops.push(CanvasOp::ClearBuffer);
    }

    fn clear_display(&mut self) -> Result<(), DisplayError> {
        self.pixels.iter_mut().for_each(|p| *p = None);
        self.ops.push(CanvasOp::ClearDisplay);
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        if self.fail_present {
            return Err(DisplayError::Communication);
        }
        self.ops.push(CanvasOp::Present);
        Ok(())
    }
}

/// One `write_line` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphCall {
    pub font: Font,
    pub baseline: Point,
    pub text: String,
    pub rotation: TextRotation,
}

/// Glyph renderer that records calls and marks each baseline origin black
#[derive(Default)]
pub struct RecordingGlyphs {
    pub calls: Vec<GlyphCall>,
}

impl RecordingGlyphs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls.iter().map(|c| c.text.as_str()).collect()
    }

    fn record<D>(
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
        self.calls.push(GlyphCall {
            font,
            baseline,
            text: String::from(text),
            rotation,
        });
        if target.bounding_box().contains(baseline) {
            target
                .draw_iter([Pixel(baseline, color)])
                .map_err(|_| RenderError::Draw)?;
        }
        Ok(())
    }
}

impl GlyphRenderer for RecordingGlyphs {
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
        self.record(target, font, baseline, text, color, TextRotation::None)
    }

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
        self.record(target, font, baseline, text, color, rotation)
    }
}

/// Asset store over owned byte vectors
#[derive(Default)]
pub struct MapAssets {
    entries: Vec<(&'static str, Vec<u8>)>,
}

impl MapAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, bytes: &[u8]) -> Self {
        self.entries.push((name, bytes.to_vec()));
        self
    }
}

impl AssetStore for MapAssets {
    fn read(&self, name: &str) -> Result<&[u8], AssetError> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, bytes)| bytes.as_slice())
            .ok_or(AssetError::NotFound)
    }
}

/// Indicator that remembers every transition
#[derive(Default)]
pub struct RecordingIndicator {
    on: bool,
    pub history: Vec<bool>,
}

impl Indicator for RecordingIndicator {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.history.push(on);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Encode an uncompressed, bottom-up 24-bit BMP
///
/// `pixels` are given top row first.
pub fn bmp_24bit(width: u32, height: u32, pixels: &[Rgb888]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);

    let stride = (width * 3 + 3) & !3;
    let image_len = stride * height;
    let offset = 14 + 40;

    let mut out = Vec::with_capacity((offset + image_len) as usize);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(offset + image_len).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&offset.to_le_bytes());

    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&image_len.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    for row in (0..height).rev() {
        let start = (row * width) as usize;
        for color in &pixels[start..start + width as usize] {
            out.extend_from_slice(&[color.b(), color.g(), color.r()]);
        }
        for _ in width * 3..stride {
            out.push(0);
        }
    }
    out
}

/// Solid square BMP
pub fn solid_bmp(side: u32, color: Rgb888) -> Vec<u8> {
    bmp_24bit(side, side, &vec![color; (side * side) as usize])
}
