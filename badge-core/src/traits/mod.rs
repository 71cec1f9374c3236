//! Hardware abstraction traits
//!
//! These traits define the interface between the badge logic
//! and hardware-specific implementations.

pub mod display;
pub mod indicator;
pub mod input;

pub use display::{Canvas, DisplayConfig, DisplayError, RefreshSpeed, Rotation};
pub use indicator::Indicator;
pub use input::ButtonInput;
