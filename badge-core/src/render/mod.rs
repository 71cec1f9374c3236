//! Asset-to-pixel rendering pipeline
//!
//! Converts decoded assets into writes on a 1-bit canvas using a strict
//! two-colour model: `BinaryColor::On` is opaque black, `BinaryColor::Off`
//! is erased. Every conversion clips against the target's bounding box
//! before writing, so an oversized source never wraps or faults.
//!
//! - `bitmap`: BMP decode and luminance thresholding
//! - `qr`: QR encoding and integer-scaled module blit
//! - `glyph`: text lines through a font rasterizer

pub mod bitmap;
pub mod glyph;
pub mod qr;

pub use bitmap::{blit_bitmap, draw_bitmap, threshold, LUMINANCE_THRESHOLD};
pub use glyph::{Font, GlyphRenderer, Rotated, TextRotation, MonoGlyphs};
pub use qr::{blit_modules, draw_qr_code, ModuleGrid, QrBuffers, QrMatrix, QrPlacement, QR_SCALE};

use crate::assets::AssetError;

/// What could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeKind {
    /// Asset bytes are not a supported BMP image
    Bitmap,
    /// Content does not fit any QR version the badge accepts
    QrCode,
    /// Text asset is not valid UTF-8
    Text,
}

/// Ways an otherwise readable text asset can be malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContentError {
    /// The requested line does not exist
    MissingLine,
    /// Address line has no space between address and comment
    MissingSeparator,
    /// Address line starts with the separator
    EmptyAddress,
    /// Address is too short to show a head and tail
    AddressTooShort,
}

/// Rendering errors
///
/// None of these are fatal: the draw step that hit one is skipped and
/// the rest of the screen is still rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Asset store has no asset with the requested name
    AssetNotFound,
    /// Asset exists but could not be decoded
    AssetDecode(DecodeKind),
    /// Text asset does not have the expected shape
    MalformedContent(ContentError),
    /// The draw target rejected a write
    Draw,
}

impl From<AssetError> for RenderError {
    fn from(e: AssetError) -> Self {
        match e {
            AssetError::NotFound => RenderError::AssetNotFound,
        }
    }
}

impl From<ContentError> for RenderError {
    fn from(e: ContentError) -> Self {
        RenderError::MalformedContent(e)
    }
}
