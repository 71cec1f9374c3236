//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in badge-core, written against `embedded-hal` 1.0:
//!
//! - E-paper panel (UC8151), the badge's canvas
//! - Button sampler over five GPIO inputs
//! - Indicator LED over a GPIO output

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod epd;
pub mod led;

pub use button::GpioButtons;
pub use epd::Uc8151;
pub use led::GpioIndicator;
