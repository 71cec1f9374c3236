//! Read-only asset store
//!
//! Assets are named byte blobs bundled into the firmware image at build
//! time. They live for the whole process and are never mutated.

pub mod text;

pub use text::{AddressEntry, TextLines};

/// Asset lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// No asset with the requested name
    NotFound,
}

/// Source of named, immutable assets
pub trait AssetStore {
    /// Look up an asset by name
    fn read(&self, name: &str) -> Result<&[u8], AssetError>;
}

/// Asset store backed by a static table, typically filled with
/// `include_bytes!`
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAssets {
    entries: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedAssets {
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }
}

impl AssetStore for EmbeddedAssets {
    fn read(&self, name: &str) -> Result<&[u8], AssetError> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, bytes)| *bytes)
            .ok_or(AssetError::NotFound)
    }
}
