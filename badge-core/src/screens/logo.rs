//! Logo screen: one short label in the large face

use embedded_graphics::pixelcolor::BinaryColor;

use crate::assets::AssetStore;
use crate::config::{LOGO, LOGO_ALTERNATE_TEXT, LOGO_PRIMARY_TEXT};
use crate::render::{GlyphRenderer, TextRotation};
use crate::state::ViewMode;
use crate::traits::Canvas;

use super::{DrawStep, Flow, RenderContext, RenderReport};

/// Label shown for `view`
pub fn label(view: ViewMode) -> &'static str {
    match view {
        ViewMode::Primary => LOGO_PRIMARY_TEXT,
        ViewMode::Alternate => LOGO_ALTERNATE_TEXT,
    }
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
    let result = ctx.glyphs.write_line_rotated(
        &mut *ctx.canvas,
        LOGO.font,
        LOGO.baseline,
        label(view),
        BinaryColor::On,
        TextRotation::None,
    );
    if let Err(e) = result {
        report.skip(DrawStep::Logo, e);
    }

    Flow::Present
}
