//! Badge main loop
//!
//! Samples the buttons every tick and hands the sample to the badge,
//! which redraws on every tick a button is held. Display errors are
//! logged and the loop carries on with the next tick.

use badge_core::screens::RenderReport;
use badge_core::state::Button;
use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use crate::board::{BoardBadge, BoardButtons};

#[embassy_executor::task]
pub async fn badge_task(
    badge: &'static mut BoardBadge,
    mut buttons: BoardButtons,
    // Held for the lifetime of the task; dropping it cuts board power
    _power: Output<'static>,
) {
    info!("Badge task started");

    let mut delay = Delay;

    loop {
        // Sleeps a full tick after the draw, however long the refresh took
        match badge.run_tick(&mut buttons, &mut delay).await {
            Ok(outcome) => {
                for button in Button::ALL {
                    if outcome.sample.is_held(button) {
                        debug!("Button {:?} held", button);
                    }
                }
                if let Some(report) = outcome.redraw {
                    log_report(&report);
                }
            }
            Err(e) => error!("Display error during redraw: {:?}", e),
        }
    }
}

/// Log what a render pass did
pub fn log_report(report: &RenderReport) {
    info!("Drew {:?}/{:?}", report.state.screen, report.state.view);

    for skipped in report.skipped.iter() {
        warn!("Skipped {:?}: {:?}", skipped.step, skipped.error);
    }

    if let Some(qr) = report.qr {
        if qr.clipped {
            warn!("QR code clipped at canvas edge: {:?}", qr.extent);
        }
    }

    if !report.presented {
        warn!("Frame not presented");
    }
}
