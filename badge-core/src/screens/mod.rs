//! Screen catalog
//!
//! Each screen maps a `ViewMode` onto a fixed sequence of draw steps.
//! A render pass always erases the buffer and the panel first, then draws,
//! then presents. A failing draw step is recorded in the `RenderReport`
//! and skipped; the rest of the screen is still drawn.

mod bitcoin;
mod contact;
mod logo;

use embedded_graphics::pixelcolor::BinaryColor;
use heapless::Vec;

use crate::assets::AssetStore;
use crate::config::TextSlot;
use crate::render::{GlyphRenderer, QrBuffers, QrPlacement, RenderError};
use crate::state::{RenderState, ScreenId, ViewMode};
use crate::traits::{Canvas, DisplayError};

/// Maximum skipped steps recorded per pass
pub const MAX_SKIPPED: usize = 8;

/// Individual draw operations, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawStep {
    ContactBitmap,
    ContactText,
    ContactName,
    ContactTitle,
    ContactExtra,
    BitcoinAddress,
    BitcoinQr,
    BitcoinTitle,
    BitcoinAddressHead,
    BitcoinEllipsis,
    BitcoinAddressTail,
    BitcoinComment,
    Logo,
}

/// A draw step that was skipped, and why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SkippedStep {
    pub step: DrawStep,
    pub error: RenderError,
}

/// Outcome of one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderReport {
    pub state: RenderState,
    pub skipped: Vec<SkippedStep, MAX_SKIPPED>,
    /// Where the QR code landed, if one was drawn
    pub qr: Option<QrPlacement>,
    /// The drawn frame was pushed to the panel
    pub presented: bool,
}

impl RenderReport {
    pub fn new(state: RenderState) -> Self {
        Self {
            state,
            skipped: Vec::new(),
            qr: None,
            presented: false,
        }
    }

    /// Every step ran
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Error recorded for `step`, if it was skipped
    pub fn skipped_step(&self, step: DrawStep) -> Option<RenderError> {
        self.skipped.iter().find(|s| s.step == step).map(|s| s.error)
    }

    fn skip(&mut self, step: DrawStep, error: RenderError) {
        // A full list drops later entries
        let _ = self.skipped.push(SkippedStep { step, error });
    }
}

/// Whether a screen wants its frame presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Present,
    Abandon,
}

/// Everything a render pass draws with
pub struct RenderContext<'a, C, G, A> {
    pub canvas: &'a mut C,
    pub glyphs: &'a mut G,
    pub assets: &'a A,
    pub qr: &'a mut QrBuffers,
}

impl<'a, C, G, A> RenderContext<'a, C, G, A>
where
    C: Canvas,
    G: GlyphRenderer,
    A: AssetStore,
{
    pub fn new(canvas: &'a mut C, glyphs: &'a mut G, assets: &'a A, qr: &'a mut QrBuffers) -> Self {
        Self {
            canvas,
            glyphs,
            assets,
            qr,
        }
    }

    /// Clear, draw the screen for `state`, and present
    ///
    /// Only panel errors are returned. Content errors are in the report.
    pub fn render(&mut self, state: RenderState) -> Result<RenderReport, DisplayError> {
        let mut report = RenderReport::new(state);

        self.canvas.clear_buffer();
        self.canvas.clear_display()?;

        let flow = match state.screen {
            ScreenId::Contact => contact::draw(self, state.view, &mut report),
            ScreenId::Bitcoin => bitcoin::draw(self, state.view, &mut report),
            ScreenId::Logo => logo::draw(self, state.view, &mut report),
        };

        if flow == Flow::Present {
            self.canvas.present()?;
            report.presented = true;
        }
        Ok(report)
    }

    /// Draw one line of black text, recording a failure
    fn text(&mut self, report: &mut RenderReport, step: DrawStep, slot: TextSlot, text: &str) {
        let result = self
            .glyphs
            .write_line(&mut *self.canvas, slot.font, slot.baseline, text, BinaryColor::On);
        if let Err(e) = result {
            report.skip(step, e);
        }
    }

    /// Draw a line that may itself have failed to load
    fn text_line(
        &mut self,
        report: &mut RenderReport,
        step: DrawStep,
        slot: TextSlot,
        line: Result<&str, RenderError>,
    ) {
        match line {
            Ok(text) => self.text(report, step, slot, text),
            Err(e) => report.skip(step, e),
        }
    }
}

/// Which line of a multi-variant asset a view reads
fn variant_line(view: ViewMode) -> usize {
    match view {
        ViewMode::Primary => 0,
        ViewMode::Alternate => 1,
    }
}
