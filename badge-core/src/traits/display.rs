//! Canvas trait for the e-paper panel

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

/// Errors that can occur talking to the display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer failed
    Communication,
    /// Control pin (DC, RST, CS) could not be driven
    Pin,
}

/// Logical rotation applied between drawing coordinates and the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

/// Waveform selection, trading image quality for refresh time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshSpeed {
    /// Controller OTP waveform: best quality, slowest
    #[default]
    Default,
    Medium,
    Fast,
    /// Fastest, with visible ghosting
    Turbo,
}

/// Display configuration applied once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub rotation: Rotation,
    pub speed: RefreshSpeed,
    /// `present` waits for the panel to finish refreshing
    pub blocking: bool,
}

/// 1-bit drawing surface backed by an e-paper panel
///
/// Drawing goes through `DrawTarget` into a retained buffer; nothing is
/// visible until `present`. `BinaryColor::On` is opaque black,
/// `BinaryColor::Off` is erased (white). Writes outside the canvas are
/// clipped by the implementation.
pub trait Canvas: DrawTarget<Color = BinaryColor> {
    /// Apply rotation, waveform and blocking behaviour
    fn configure(&mut self, config: &DisplayConfig) -> Result<(), DisplayError>;

    /// Erase the retained buffer (no panel traffic)
    fn clear_buffer(&mut self);

    /// Erase the buffer and push the blank frame to the panel
    fn clear_display(&mut self) -> Result<(), DisplayError>;

    /// Push the retained buffer to the panel with a full refresh
    ///
    /// When the canvas is configured as blocking this returns only after
    /// the refresh cycle has finished. There is no timeout.
    fn present(&mut self) -> Result<(), DisplayError>;
}
