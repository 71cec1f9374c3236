//! Contact screen: portrait bitmap on the right, name and title on the left

use crate::assets::{AssetStore, TextLines};
use crate::config::{
    CONTACT_BITMAP, CONTACT_BITMAP_ORIGIN, CONTACT_EXTRA, CONTACT_NAME, CONTACT_TEXT, CONTACT_TITLE,
};
use crate::render::{draw_bitmap, GlyphRenderer, RenderError};
use crate::state::ViewMode;
use crate::traits::Canvas;

use super::{DrawStep, Flow, RenderContext, RenderReport};

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

    let bitmap = assets
        .read(CONTACT_BITMAP)
        .map_err(RenderError::from)
        .and_then(|bytes| draw_bitmap(&mut *ctx.canvas, bytes, CONTACT_BITMAP_ORIGIN));
    if let Err(e) = bitmap {
        report.skip(DrawStep::ContactBitmap, e);
    }

    let lines = match assets
        .read(CONTACT_TEXT)
        .map_err(RenderError::from)
        .and_then(TextLines::parse)
    {
        Ok(lines) => lines,
        Err(e) => {
            report.skip(DrawStep::ContactText, e);
            return Flow::Present;
        }
    };

    ctx.text_line(report, DrawStep::ContactName, CONTACT_NAME, lines.line(0));
    ctx.text_line(report, DrawStep::ContactTitle, CONTACT_TITLE, lines.line(1));
    if view.is_alternate() {
        ctx.text_line(report, DrawStep::ContactExtra, CONTACT_EXTRA, lines.line(2));
    }

    Flow::Present
}
