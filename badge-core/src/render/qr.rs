//! QR code encoding and module blit
//!
//! Content is encoded at Medium error correction with the smallest version
//! that fits, up to version 10. Each module is drawn as a `QR_SCALE` square;
//! light modules are written as well, so the code is readable on top of
//! whatever was drawn before.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use qrcodegen_no_heap::{QrCode, QrCodeEcc, Version};

use super::{DecodeKind, RenderError};

/// Pixels per module edge
pub const QR_SCALE: u32 = 3;

/// Light modules around the symbol
pub const QUIET_ZONE: u32 = 4;

/// Largest symbol version accepted
pub const MAX_VERSION: u8 = 10;

const MAX_SIDE: usize = MAX_VERSION as usize * 4 + 17;

/// Scratch and output buffer size for `MAX_VERSION`
pub const QR_BUFFER_LEN: usize = (MAX_SIDE * MAX_SIDE + 7) / 8 + 1;

/// Square grid of dark and light modules
pub trait ModuleGrid {
    /// Modules per side
    fn side(&self) -> u32;

    /// Whether the module at `(x, y)` is dark
    fn is_dark(&self, x: u32, y: u32) -> bool;
}

/// Working memory for one encode
pub struct QrBuffers {
    temp: [u8; QR_BUFFER_LEN],
    out: [u8; QR_BUFFER_LEN],
}

impl QrBuffers {
    pub const fn new() -> Self {
        Self {
            temp: [0; QR_BUFFER_LEN],
            out: [0; QR_BUFFER_LEN],
        }
    }

    /// Encode `text`, borrowing the output buffer for the matrix
    pub fn encode(&mut self, text: &str) -> Result<QrMatrix<'_>, RenderError> {
        let code = QrCode::encode_text(
            text,
            &mut self.temp,
            &mut self.out,
            QrCodeEcc::Medium,
            Version::MIN,
            Version::new(MAX_VERSION),
            None,
            false,
        )
        .map_err(|_| RenderError::AssetDecode(DecodeKind::QrCode))?;

        Ok(QrMatrix { code })
    }
}

impl Default for QrBuffers {
    fn default() -> Self {
        Self::new()
    }
}

/// Encoded symbol with its quiet zone
pub struct QrMatrix<'a> {
    code: QrCode<'a>,
}

impl QrMatrix<'_> {
    /// Symbol version (1-40)
    pub fn version(&self) -> u8 {
        self.code.version().value()
    }
}

impl ModuleGrid for QrMatrix<'_> {
    fn side(&self) -> u32 {
        self.code.size() as u32 + 2 * QUIET_ZONE
    }

    fn is_dark(&self, x: u32, y: u32) -> bool {
        // get_module reports light outside the symbol
        let q = QUIET_ZONE as i32;
        self.code.get_module(x as i32 - q, y as i32 - q)
    }
}

/// Where a blitted grid ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QrPlacement {
    /// Full pixel extent of the grid, clipped or not
    pub extent: Rectangle,
    /// Part of the extent fell outside the target
    pub clipped: bool,
}

/// Draw `grid` with its top-left module at `origin` (in modules)
///
/// Module `(bx, by)` covers pixels `((x + bx) * scale + ix, (y + by) * scale + iy)`
/// for `ix, iy` in `0..scale`. Pixels outside the target are dropped.
pub fn blit_modules<D, G>(
    target: &mut D,
    grid: &G,
    origin: Point,
    scale: u32,
) -> Result<QrPlacement, RenderError>
where
    D: DrawTarget<Color = BinaryColor>,
    G: ModuleGrid + ?Sized,
{
    let bounds = target.bounding_box();
    let side = grid.side();
    let step = scale as i32;

    let extent = Rectangle::new(origin * step, Size::new_equal(side * scale));
    let clipped = bounds.intersection(&extent) != extent;

    for by in 0..side {
        for bx in 0..side {
            let top_left = Point::new(
                (origin.x + bx as i32) * step,
                (origin.y + by as i32) * step,
            );
            let module = Rectangle::new(top_left, Size::new_equal(scale)).intersection(&bounds);
            if module.is_zero_sized() {
                continue;
            }

            let color = if grid.is_dark(bx, by) {
                BinaryColor::On
            } else {
                BinaryColor::Off
            };
            target.fill_solid(&module, color).map_err(|_| RenderError::Draw)?;
        }
    }

    Ok(QrPlacement { extent, clipped })
}

/// Encode `content` and draw it at `origin` (in modules) at `QR_SCALE`
pub fn draw_qr_code<D>(
    target: &mut D,
    buffers: &mut QrBuffers,
    content: &str,
    origin: Point,
) -> Result<QrPlacement, RenderError>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let matrix = buffers.encode(content)?;
    blit_modules(target, &matrix, origin, QR_SCALE)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::testing::RecordingCanvas;
    use std::boxed::Box;

    /// Checkerboard grid
    struct Checker(u32);

    impl ModuleGrid for Checker {
        fn side(&self) -> u32 {
            self.0
        }

        fn is_dark(&self, x: u32, y: u32) -> bool {
            (x + y) % 2 == 0
        }
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(QR_BUFFER_LEN, 408);
    }

    #[test]
    fn test_blit_scales_modules() {
        let mut canvas = RecordingCanvas::new(20, 20);
        let placement = blit_modules(&mut canvas, &Checker(2), Point::new(1, 1), 3).unwrap();

        assert_eq!(
            placement.extent,
            Rectangle::new(Point::new(3, 3), Size::new(6, 6))
        );
        assert!(!placement.clipped);

        // Module (0, 0) is dark and covers 3..6
        for p in 3..6 {
            assert_eq!(canvas.pixel(p, 3), Some(BinaryColor::On));
            assert_eq!(canvas.pixel(3, p), Some(BinaryColor::On));
        }
        // Module (1, 0) is light and still written
        assert_eq!(canvas.pixel(6, 3), Some(BinaryColor::Off));
        assert_eq!(canvas.pixel(8, 5), Some(BinaryColor::Off));
        // Nothing outside the extent
        assert_eq!(canvas.pixel(2, 2), None);
        assert_eq!(canvas.pixel(9, 9), None);
        assert_eq!(canvas.writes(), 36);
    }

    #[test]
    fn test_blit_clips_and_reports() {
        let mut canvas = RecordingCanvas::new(10, 10);
        let placement = blit_modules(&mut canvas, &Checker(5), Point::zero(), 3).unwrap();

        assert!(placement.clipped);
        assert_eq!(placement.extent.size, Size::new(15, 15));
        assert_eq!(canvas.writes(), 100);
        assert_eq!(canvas.out_of_bounds(), 0);
    }

    #[test]
    fn test_encode_address() {
        let mut buffers = Box::new(QrBuffers::new());
        let matrix = buffers.encode("1BoatSLRHtKNngkdXEeobR76b53LETtpyT").unwrap();

        assert_eq!(matrix.version(), 3);
        assert_eq!(matrix.side(), 37);
        // Quiet zone is light
        assert!(!matrix.is_dark(0, 0));
        assert!(!matrix.is_dark(3, 3));
        // Finder pattern corner is dark
        assert!(matrix.is_dark(4, 4));
    }

    #[test]
    fn test_draw_address_fits_canvas() {
        let mut buffers = Box::new(QrBuffers::new());
        let mut canvas = RecordingCanvas::new(296, 128);

        let placement = draw_qr_code(
            &mut canvas,
            &mut buffers,
            "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
            Point::zero(),
        )
        .unwrap();

        assert_eq!(
            placement.extent,
            Rectangle::new(Point::zero(), Size::new(111, 111))
        );
        assert!(!placement.clipped);
        assert_eq!(canvas.writes(), 111 * 111);
        assert_eq!(canvas.out_of_bounds(), 0);
        assert_eq!(canvas.pixel(12, 12), Some(BinaryColor::On));
        assert_eq!(canvas.pixel(111, 0), None);
    }

    #[test]
    fn test_content_too_long() {
        let mut buffers = Box::new(QrBuffers::new());
        let long = [b'x'; 400];
        let text = core::str::from_utf8(&long).unwrap();

        assert!(buffers.encode(text).is_err());

        let mut canvas = RecordingCanvas::new(296, 128);
        let result = draw_qr_code(&mut canvas, &mut buffers, text, Point::zero());
        assert_eq!(result, Err(RenderError::AssetDecode(DecodeKind::QrCode)));
        assert_eq!(canvas.writes(), 0);
    }
}
