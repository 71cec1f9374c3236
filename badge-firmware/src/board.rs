//! Badger 2040 board definitions
//!
//! Pin map (RP2040 GPIO):
//! - Buttons A/B/C/Up/Down: 12/13/14/15/11, active-high with pull-downs
//! - Activity LED: 25
//! - 3V3 enable: 10, must stay high or the board powers off on battery
//! - UC8151 panel on SPI0: SCK 18, MOSI 19, CS 17, DC 20, RST 21, BUSY 26

use badge_core::assets::EmbeddedAssets;
use badge_core::render::MonoGlyphs;
use badge_core::Badge;
use badge_drivers::{GpioButtons, GpioIndicator, Uc8151};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;

/// Panel SPI clock
pub const SPI_FREQUENCY_HZ: u32 = 12_000_000;

pub type SpiBus = Spi<'static, SPI0, Blocking>;
pub type SpiDev = ExclusiveDevice<SpiBus, Output<'static>, Delay>;

pub type Panel = Uc8151<SpiDev, Output<'static>, Output<'static>, Input<'static>, Delay>;
pub type BoardButtons = GpioButtons<Input<'static>>;
pub type BoardIndicator = GpioIndicator<Output<'static>>;
pub type BoardBadge = Badge<Panel, MonoGlyphs, EmbeddedAssets, BoardIndicator>;
