//! Badger - e-paper name badge firmware
//!
//! Firmware binary for the Badger 2040 (RP2040 + UC8151 e-paper panel).
//! Shows one of three static screens, picked with the A/B/C buttons;
//! Up/Down flip the current screen to its alternate view.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use badge_core::config::DISPLAY_CONFIG;
use badge_core::render::MonoGlyphs;
use badge_core::Badge;
use badge_drivers::{GpioButtons, GpioIndicator, Uc8151};

use crate::board::{BoardBadge, SPI_FREQUENCY_HZ};

mod assets;
mod board;
mod tasks;

// The badge holds the QR scratch buffers and the panel frame buffer;
// keep it off the executor stack
static BADGE: StaticCell<BoardBadge> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Badge firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Keep the 3V3 rail up while running from battery
    let power = Output::new(p.PIN_10, Level::High);

    let buttons = GpioButtons::new(
        Input::new(p.PIN_12, Pull::Down),
        Input::new(p.PIN_13, Pull::Down),
        Input::new(p.PIN_14, Pull::Down),
        Input::new(p.PIN_15, Pull::Down),
        Input::new(p.PIN_11, Pull::Down),
    );

    let led = GpioIndicator::new_active_high(Output::new(p.PIN_25, Level::Low));

    // Panel on SPI0, write-only
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi_bus = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let spi_dev = unwrap!(ExclusiveDevice::new(spi_bus, cs, Delay));

    let panel = Uc8151::new(
        spi_dev,
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_21, Level::High),
        Input::new(p.PIN_26, Pull::Up),
        Delay,
    );

    info!("Peripherals initialized");

    let badge = BADGE.init(Badge::new(panel, MonoGlyphs::new(), assets::store(), led));

    // Initial screen; the LED stays off for the power-on draw
    match badge.start(&DISPLAY_CONFIG) {
        Ok(report) => tasks::badge::log_report(&report),
        Err(e) => error!("Display init failed: {:?}", e),
    }

    spawner.spawn(unwrap!(tasks::badge_task(badge, buttons, power)));

    info!("Badge running");
}
