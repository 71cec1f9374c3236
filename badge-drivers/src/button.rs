//! GPIO button sampler
//!
//! Reads the five badge buttons as plain levels. Buttons are active-high
//! with pull-downs; there is no debouncing, a bouncing contact simply
//! reads as held on whichever ticks catch it high.

use badge_core::state::{Button, ButtonSample};
use badge_core::traits::ButtonInput;
use embedded_hal::digital::InputPin;

/// Five input pins in `Button` order
pub struct GpioButtons<P> {
    pins: [P; 5],
}

impl<P: InputPin> GpioButtons<P> {
    /// Pins for A, B, C, Up, Down
    pub fn new(a: P, b: P, c: P, up: P, down: P) -> Self {
        Self {
            pins: [a, b, c, up, down],
        }
    }
}

impl<P: InputPin> ButtonInput for GpioButtons<P> {
    fn sample(&mut self) -> ButtonSample {
        let mut sample = ButtonSample::IDLE;
        for (button, pin) in Button::ALL.into_iter().zip(self.pins.iter_mut()) {
            // An unreadable pin counts as released
            sample.set(button, pin.is_high().unwrap_or(false));
        }
        sample
    }
}
