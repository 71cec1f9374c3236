//! Input/state controller
//!
//! Maps level-triggered button samples onto the selected screen and its
//! view mode. The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::{Button, ButtonSample, EdgeFilter};
pub use machine::{Controller, RenderState, ScreenId, Tick, ViewMode};
