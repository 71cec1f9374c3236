//! Indicator LED trait

/// Single on/off indicator, used as a redraw heartbeat
pub trait Indicator {
    /// Turn the indicator on or off
    fn set_on(&mut self, on: bool);

    /// Check if the indicator is currently on
    fn is_on(&self) -> bool;
}
