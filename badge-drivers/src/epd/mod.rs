//! E-paper panel drivers

pub mod uc8151;

pub use uc8151::Uc8151;
