//! Board-agnostic core logic for the e-paper badge firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (canvas, buttons, indicator)
//! - Input/state controller choosing the screen and view
//! - Asset store contract and text asset parsing
//! - Rendering pipeline (bitmap threshold, QR modules, text)
//! - Screen catalog and the per-tick badge context
//! - Compile-time configuration and screen layout

#![no_std]
#![deny(unsafe_code)]

pub mod assets;
pub mod badge;
pub mod config;
pub mod render;
pub mod screens;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use badge::{Badge, TickOutcome};
