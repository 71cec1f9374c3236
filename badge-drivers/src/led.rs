//! GPIO indicator LED
//!
//! Drives the activity LED through any `embedded-hal` output pin. The
//! pin can be wired active-high (default) or active-low.

use badge_core::traits::Indicator;
use embedded_hal::digital::OutputPin;

pub struct GpioIndicator<P> {
    pin: P,
    /// If true, LED on = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create an indicator, initially off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set_on(false);
        led
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> Indicator for GpioIndicator<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        // A failed write leaves the LED stale; it is only a heartbeat
        let _ = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
