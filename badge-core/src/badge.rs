//! Badge context tying the controller to the screens and the panel
//!
//! The badge owns every collaborator a tick touches:
//! - Canvas (the panel) and glyph renderer
//! - Asset store
//! - Indicator LED, lit for the duration of a redraw
//! - Input/state controller
//!
//! It is built once at startup and driven by the main loop with one
//! button sample per tick.

use embedded_hal_async::delay::DelayNs;

use crate::assets::AssetStore;
use crate::config::TICK_INTERVAL_MS;
use crate::render::{GlyphRenderer, QrBuffers};
use crate::screens::{RenderContext, RenderReport};
use crate::state::{ButtonSample, Controller, RenderState};
use crate::traits::{ButtonInput, Canvas, DisplayConfig, DisplayError, Indicator};

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Buttons sampled for the tick
    pub sample: ButtonSample,
    /// Render state after the tick
    pub state: RenderState,
    /// Report of the redraw, if the tick caused one
    pub redraw: Option<RenderReport>,
}

pub struct Badge<C, G, A, L> {
    canvas: C,
    glyphs: G,
    assets: A,
    indicator: L,
    controller: Controller,
    qr: QrBuffers,
}

impl<C, G, A, L> Badge<C, G, A, L>
where
    C: Canvas,
    G: GlyphRenderer,
    A: AssetStore,
    L: Indicator,
{
    pub fn new(canvas: C, glyphs: G, assets: A, indicator: L) -> Self {
        Self {
            canvas,
            glyphs,
            assets,
            indicator,
            controller: Controller::new(),
            qr: QrBuffers::new(),
        }
    }

    /// Configure the panel and draw the initial screen
    pub fn start(&mut self, config: &DisplayConfig) -> Result<RenderReport, DisplayError> {
        self.canvas.configure(config)?;
        let state = self.controller.state();
        self.render(state)
    }

    /// Run one tick: update the state from `sample` and redraw if asked
    ///
    /// The indicator is on while a redraw runs and off afterwards, even
    /// when the panel reports an error.
    pub fn step(&mut self, sample: &ButtonSample) -> Result<TickOutcome, DisplayError> {
        let tick = self.controller.tick(sample);

        let redraw = if tick.needs_redraw {
            self.indicator.set_on(true);
            let result = self.render(tick.state);
            self.indicator.set_on(false);
            Some(result?)
        } else {
            None
        };

        Ok(TickOutcome {
            sample: *sample,
            state: tick.state,
            redraw,
        })
    }

    /// Sample `buttons`, run one tick, then sleep for the tick period
    ///
    /// The sleep starts once the tick's draw has finished, so a slow
    /// refresh never shortens the gap before the next sample. It runs
    /// even when the panel reported an error.
    pub async fn run_tick<B, D>(
        &mut self,
        buttons: &mut B,
        delay: &mut D,
    ) -> Result<TickOutcome, DisplayError>
    where
        B: ButtonInput,
        D: DelayNs,
    {
        let sample = buttons.sample();
        let result = self.step(&sample);
        delay.delay_ms(TICK_INTERVAL_MS).await;
        result
    }

    pub fn state(&self) -> RenderState {
        self.controller.state()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    fn render(&mut self, state: RenderState) -> Result<RenderReport, DisplayError> {
        RenderContext::new(&mut self.canvas, &mut self.glyphs, &self.assets, &mut self.qr).render(state)
    }
}
