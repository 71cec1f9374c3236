//! Bitcoin screen: address QR code on the left, shortened address and
//! comment on the right
//!
//! Primary view shows line 0 of the address asset, alternate view line 1.
//! If the address cannot be read the frame is abandoned without being
//! presented, leaving the panel blank from the initial clear.

use crate::assets::{AddressEntry, AssetStore, TextLines};
use crate::config::{
    BITCOIN_ADDRESS_ELLIPSIS, BITCOIN_ADDRESS_HEAD, BITCOIN_ADDRESS_TAIL, BITCOIN_COMMENT, BITCOIN_QR_ORIGIN,
    BITCOIN_TEXT, BITCOIN_TITLE, BITCOIN_TITLE_TEXT, ELLIPSIS,
};
use crate::render::{draw_qr_code, GlyphRenderer, RenderError};
use crate::state::ViewMode;
use crate::traits::Canvas;

use super::{variant_line, DrawStep, Flow, RenderContext, RenderReport};

fn read_entry<A: AssetStore>(assets: &A, view: ViewMode) -> Result<AddressEntry<'_>, RenderError> {
    let bytes = assets.read(BITCOIN_TEXT)?;
    let line = TextLines::parse(bytes)?.line(variant_line(view))?;
    Ok(AddressEntry::parse(line)?)
}

pub(super) fn draw<C, G, A>(
    ctx: &mut RenderContext<'_, C, G, A>,
    view: ViewMode,
    report: &mut RenderReport,
) -> Flow
where
    C: Canvas,
    G: GlyphRenderer,
    A: AssetStore,
{
    let assets = ctx.assets;
    let entry = match read_entry(assets, view) {
        Ok(entry) => entry,
        Err(e) => {
            report.skip(DrawStep::BitcoinAddress, e);
            return Flow::Abandon;
        }
    };

    match draw_qr_code(&mut *ctx.canvas, &mut *ctx.qr, entry.address, BITCOIN_QR_ORIGIN) {
        Ok(placement) => report.qr = Some(placement),
        Err(e) => report.skip(DrawStep::BitcoinQr, e),
    }

    ctx.text(report, DrawStep::BitcoinTitle, BITCOIN_TITLE, BITCOIN_TITLE_TEXT);
    ctx.text(report, DrawStep::BitcoinAddressHead, BITCOIN_ADDRESS_HEAD, entry.head());
    ctx.text(report, DrawStep::BitcoinEllipsis, BITCOIN_ADDRESS_ELLIPSIS, ELLIPSIS);
    ctx.text(report, DrawStep::BitcoinAddressTail, BITCOIN_ADDRESS_TAIL, entry.tail());
    ctx.text(report, DrawStep::BitcoinComment, BITCOIN_COMMENT, entry.comment);

    Flow::Present
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::render::{ContentError, DecodeKind, QrBuffers};
    use crate::state::{RenderState, ScreenId};
    use crate::testing::{CanvasOp, MapAssets, RecordingCanvas, RecordingGlyphs};
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::Rectangle;
    use std::boxed::Box;
    use std::vec;
    use std::vec::Vec;

    const ADDRESSES: &[u8] =
        b"1BoatSLRHtKNngkdXEeobR76b53LETtpyT tips welcome\n3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy savings\n";

    fn render(assets: &MapAssets, view: ViewMode) -> (RecordingCanvas, RecordingGlyphs, RenderReport) {
        let mut canvas = RecordingCanvas::new(296, 128);
        let mut glyphs = RecordingGlyphs::new();
        let mut qr = Box::new(QrBuffers::new());
        let report = RenderContext::new(&mut canvas, &mut glyphs, assets, &mut qr)
            .render(RenderState::new(ScreenId::Bitcoin, view))
            .unwrap();
        (canvas, glyphs, report)
    }

    #[test]
    fn test_primary_layout() {
        let assets = MapAssets::new().with(BITCOIN_TEXT, ADDRESSES);
        let (canvas, glyphs, report) = render(&assets, ViewMode::Primary);

        assert!(report.presented);
        assert!(report.is_complete());
        assert_eq!(
            glyphs.texts(),
            vec!["Bitcoin!", "1BoatS", "...", "ETtpyT", " tips welcome"]
        );

        let baselines: Vec<Point> = glyphs.calls.iter().map(|c| c.baseline).collect();
        assert_eq!(
            baselines,
            vec![
                Point::new(128, 30),
                Point::new(128, 55),
                Point::new(191, 55),
                Point::new(227, 55),
                Point::new(128, 80),
            ]
        );

        let placement = report.qr.unwrap();
        assert_eq!(
            placement.extent,
            Rectangle::new(Point::zero(), Size::new(111, 111))
        );
        assert!(!placement.clipped);
        // Finder pattern, just inside the quiet zone
        assert_eq!(canvas.pixel(12, 12), Some(BinaryColor::On));
        assert_eq!(canvas.pixel(0, 0), Some(BinaryColor::Off));
    }

    #[test]
    fn test_alternate_reads_second_line() {
        let assets = MapAssets::new().with(BITCOIN_TEXT, ADDRESSES);
        let (_, glyphs, report) = render(&assets, ViewMode::Alternate);

        assert!(report.is_complete());
        assert_eq!(
            glyphs.texts(),
            vec!["Bitcoin!", "3J98t1", "...", "RhWNLy", " savings"]
        );
    }

    #[test]
    fn test_missing_asset_abandons_frame() {
        let assets = MapAssets::new();
        let (canvas, glyphs, report) = render(&assets, ViewMode::Primary);

        assert!(!report.presented);
        assert_eq!(
            report.skipped_step(DrawStep::BitcoinAddress),
            Some(RenderError::AssetNotFound)
        );
        assert!(glyphs.calls.is_empty());
        assert_eq!(canvas.ops(), &[CanvasOp::ClearBuffer, CanvasOp::ClearDisplay]);
        assert_eq!(canvas.writes(), 0);
    }

    #[test]
    fn test_address_without_separator_abandons_frame() {
        let assets = MapAssets::new().with(BITCOIN_TEXT, b"1BoatSLRHtKNngkdXEeobR76b53LETtpyT\n");
        let (canvas, _, report) = render(&assets, ViewMode::Primary);

        assert!(!report.presented);
        assert_eq!(
            report.skipped_step(DrawStep::BitcoinAddress),
            Some(RenderError::MalformedContent(ContentError::MissingSeparator))
        );
        assert_eq!(canvas.presents(), 0);
    }

    #[test]
    fn test_missing_alternate_line_abandons_frame() {
        let assets = MapAssets::new().with(BITCOIN_TEXT, b"1BoatSLRHtKNngkdXEeobR76b53LETtpyT tips");
        let (_, _, report) = render(&assets, ViewMode::Alternate);

        assert!(!report.presented);
        assert_eq!(
            report.skipped_step(DrawStep::BitcoinAddress),
            Some(RenderError::MalformedContent(ContentError::MissingLine))
        );
    }

    #[test]
    fn test_short_address_abandons_frame() {
        let assets = MapAssets::new().with(BITCOIN_TEXT, b"1Boat tips\n");
        let (_, _, report) = render(&assets, ViewMode::Primary);

        assert!(!report.presented);
        assert_eq!(
            report.skipped_step(DrawStep::BitcoinAddress),
            Some(RenderError::MalformedContent(ContentError::AddressTooShort))
        );
    }

    #[test]
    fn test_oversized_address_skips_qr_only() {
        let mut line = Vec::new();
        line.extend(core::iter::repeat(b'x').take(300));
        line.extend_from_slice(b" long one\n");
        let assets = MapAssets::new().with(BITCOIN_TEXT, &line);
        let (_, glyphs, report) = render(&assets, ViewMode::Primary);

        assert!(report.presented);
        assert_eq!(report.qr, None);
        assert_eq!(
            report.skipped_step(DrawStep::BitcoinQr),
            Some(RenderError::AssetDecode(DecodeKind::QrCode))
        );
        assert_eq!(glyphs.calls.len(), 5);
    }
}
