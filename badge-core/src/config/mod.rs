//! Compile-time configuration
//!
//! The badge has no runtime configuration: timing, panel geometry, asset
//! names and the screen layout are fixed at build time.

pub mod layout;

pub use layout::*;

use crate::traits::{DisplayConfig, RefreshSpeed, Rotation};

/// Main loop period (4 Hz)
pub const TICK_INTERVAL_MS: u32 = 250;

/// Physical panel width in pixels (UC8151, 128 source lines)
pub const PANEL_WIDTH: u16 = 128;

/// Physical panel height in pixels (296 gate lines)
pub const PANEL_HEIGHT: u16 = 296;

/// Logical canvas width after the default rotation
pub const CANVAS_WIDTH: u32 = PANEL_HEIGHT as u32;

/// Logical canvas height after the default rotation
pub const CANVAS_HEIGHT: u32 = PANEL_WIDTH as u32;

/// Display settings applied at startup
///
/// Landscape orientation, fast waveform, and a blocking present so the
/// loop never samples buttons while the panel is still refreshing.
pub const DISPLAY_CONFIG: DisplayConfig = DisplayConfig {
    rotation: Rotation::Deg270,
    speed: RefreshSpeed::Fast,
    blocking: true,
};

/// Bitmap shown on the contact screen
pub const CONTACT_BITMAP: &str = "smile.bmp";

/// Three-line contact card: name, title, extra line for the alternate view
pub const CONTACT_TEXT: &str = "contact.txt";

/// Two `"<address> <comment>"` lines: primary and alternate address
pub const BITCOIN_TEXT: &str = "bitcoin.txt";
