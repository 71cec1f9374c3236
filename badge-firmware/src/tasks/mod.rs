//! Embassy async tasks

pub mod badge;

pub use badge::badge_task;
