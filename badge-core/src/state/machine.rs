//! Screen selection state machine
//!
//! The rendered frame is a pure function of `(ScreenId, ViewMode)`.
//! The controller maps one button sample per tick onto that pair.

use super::events::ButtonSample;

/// Screens the badge can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenId {
    /// Bitmap and contact text (button A)
    #[default]
    Contact,
    /// Bitcoin address with QR code (button B)
    Bitcoin,
    /// Large text logo (button C)
    Logo,
}

impl ScreenId {
    pub const ALL: [ScreenId; 3] = [ScreenId::Contact, ScreenId::Bitcoin, ScreenId::Logo];

    /// Screen chosen by the selector buttons of a sample
    ///
    /// Ties resolve in fixed priority: A, then B, then C.
    pub fn selected_by(sample: &ButtonSample) -> Option<ScreenId> {
        if sample.a {
            Some(ScreenId::Contact)
        } else if sample.b {
            Some(ScreenId::Bitcoin)
        } else if sample.c {
            Some(ScreenId::Logo)
        } else {
            None
        }
    }
}

/// Per-screen view variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewMode {
    #[default]
    Primary,
    Alternate,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Primary => ViewMode::Alternate,
            ViewMode::Alternate => ViewMode::Primary,
        }
    }

    pub fn is_alternate(self) -> bool {
        self == ViewMode::Alternate
    }
}

/// Everything that determines the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderState {
    pub screen: ScreenId,
    pub view: ViewMode,
}

impl RenderState {
    pub const fn new(screen: ScreenId, view: ViewMode) -> Self {
        Self { screen, view }
    }

    /// Process one button sample and return the next state
    ///
    /// This is the core transition logic:
    /// - Up or Down flips the view
    /// - A/B/C select a screen (A wins over B wins over C)
    /// - any selector forces the view back to primary, overriding a
    ///   toggle from the same sample
    pub fn transition(self, sample: &ButtonSample) -> Self {
        let mut next = self;

        if sample.toggle_pressed() {
            next.view = next.view.toggled();
        }

        if let Some(screen) = ScreenId::selected_by(sample) {
            next.screen = screen;
        }

        if sample.selector_pressed() {
            next.view = ViewMode::Primary;
        }

        next
    }
}

/// Result of one controller tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    pub state: RenderState,
    /// Set whenever any qualifying button is held
    pub needs_redraw: bool,
}

/// Input/state controller
///
/// Holds the current render state. No debouncing and no edge detection:
/// a held button asks for a redraw on every tick it is read as active.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: RenderState,
}

impl Controller {
    /// Create a controller on the contact screen, primary view
    pub fn new() -> Self {
        Self {
            state: RenderState::default(),
        }
    }

    /// Create a controller starting from an arbitrary state
    pub fn with_state(state: RenderState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Advance by one sample
    pub fn tick(&mut self, sample: &ButtonSample) -> Tick {
        self.state = self.state.transition(sample);
        Tick {
            state: self.state,
            needs_redraw: sample.selector_pressed() || sample.toggle_pressed(),
        }
    }
}
