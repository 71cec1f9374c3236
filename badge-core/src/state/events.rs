//! Button samples that drive state transitions

/// Physical buttons on the badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Selects the contact screen
    A,
    /// Selects the Bitcoin screen
    B,
    /// Selects the logo screen
    C,
    /// Flips the alternate view
    Up,
    /// Flips the alternate view
    Down,
}

impl Button {
    /// All buttons, in selector priority order followed by the toggles
    pub const ALL: [Button; 5] = [Button::A, Button::B, Button::C, Button::Up, Button::Down];
}

/// Level snapshot of all five buttons for one tick
///
/// A button is `true` while it is held. Sampling is level-triggered:
/// a button held across several ticks shows up in every one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub up: bool,
    pub down: bool,
}

impl ButtonSample {
    /// Sample with no buttons held
    pub const IDLE: ButtonSample = ButtonSample {
        a: false,
        b: false,
        c: false,
        up: false,
        down: false,
    };

    /// Sample with exactly the given buttons held
    pub fn from_buttons(buttons: &[Button]) -> Self {
        let mut sample = Self::IDLE;
        for &button in buttons {
            sample.set(button, true);
        }
        sample
    }

    /// Whether a single button is held
    pub fn is_held(&self, button: Button) -> bool {
        match button {
            Button::A => self.a,
            Button::B => self.b,
            Button::C => self.c,
            Button::Up => self.up,
            Button::Down => self.down,
        }
    }

    /// Set the level of a single button
    pub fn set(&mut self, button: Button, held: bool) {
        match button {
            Button::A => self.a = held,
            Button::B => self.b = held,
            Button::C => self.c = held,
            Button::Up => self.up = held,
            Button::Down => self.down = held,
        }
    }

    /// Any of the screen selectors (A, B, C) is held
    pub fn selector_pressed(&self) -> bool {
        self.a || self.b || self.c
    }

    /// Any of the view toggles (Up, Down) is held
    pub fn toggle_pressed(&self) -> bool {
        self.up || self.down
    }

    /// No button is held
    pub fn is_idle(&self) -> bool {
        !self.selector_pressed() && !self.toggle_pressed()
    }
}

/// Rising-edge filter for button samples
///
/// The controller itself is level-triggered. Placing this filter in front
/// of it turns a held button into a single active tick, for callers that
/// want one redraw per press instead of one per tick held.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeFilter {
    previous: ButtonSample,
}

impl EdgeFilter {
    pub const fn new() -> Self {
        Self {
            previous: ButtonSample::IDLE,
        }
    }

    /// Return only the buttons that went from released to held since the
    /// previous call
    pub fn filter(&mut self, sample: ButtonSample) -> ButtonSample {
        let mut rising = ButtonSample::IDLE;
        for button in Button::ALL {
            rising.set(
                button,
                sample.is_held(button) && !self.previous.is_held(button),
            );
        }
        self.previous = sample;
        rising
    }
}
