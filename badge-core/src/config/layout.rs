//! Screen layout
//!
//! Pixel positions are in logical (rotated) canvas coordinates. Text
//! positions are baselines.

use embedded_graphics::prelude::Point;

use crate::render::Font;

/// Contact screen
pub const CONTACT_BITMAP_ORIGIN: Point = Point::new(168 + 12, 0);
pub const CONTACT_NAME: TextSlot = TextSlot::new(Font::Bold12, 0, 30);
pub const CONTACT_TITLE: TextSlot = TextSlot::new(Font::Bold9, 0, 55);
pub const CONTACT_EXTRA: TextSlot = TextSlot::new(Font::Bold9, 0, 80);

/// Bitcoin screen
///
/// The QR origin is in modules, not pixels.
pub const BITCOIN_QR_ORIGIN: Point = Point::new(0, 0);
pub const BITCOIN_TITLE_TEXT: &str = "Bitcoin!";
pub const BITCOIN_TITLE: TextSlot = TextSlot::new(Font::Bold12, 128, 30);
pub const BITCOIN_ADDRESS_HEAD: TextSlot = TextSlot::new(Font::Regular9, 128, 55);
pub const BITCOIN_ADDRESS_ELLIPSIS: TextSlot = TextSlot::new(Font::Regular9, 128 + 9 * 7, 55);
pub const BITCOIN_ADDRESS_TAIL: TextSlot = TextSlot::new(Font::Regular9, 128 + 9 * 7 + 9 * 4, 55);
pub const BITCOIN_COMMENT: TextSlot = TextSlot::new(Font::Regular9, 128, 80);

/// Characters of the address shown before and after the ellipsis
pub const ADDRESS_AFFIX_LEN: usize = 6;
pub const ELLIPSIS: &str = "...";

/// Logo screen
pub const LOGO: TextSlot = TextSlot::new(Font::Bold24, 8, 30);
pub const LOGO_PRIMARY_TEXT: &str = "CCC";
pub const LOGO_ALTERNATE_TEXT: &str = "CLT";

/// Font and baseline position of one line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSlot {
    pub font: Font,
    pub baseline: Point,
}

impl TextSlot {
    pub const fn new(font: Font, x: i32, y: i32) -> Self {
        Self {
            font,
            baseline: Point::new(x, y),
        }
    }
}
