//! Button input trait

use crate::state::ButtonSample;

/// Source of per-tick button samples
///
/// Sampling is a synchronous poll and is assumed infallible.
pub trait ButtonInput {
    /// Read the current level of all five buttons
    fn sample(&mut self) -> ButtonSample;
}
