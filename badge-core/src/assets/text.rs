//! Line-oriented text assets
//!
//! Lines are separated by `\n`; a trailing `\r` is dropped so files saved
//! with CRLF endings render the same.

use crate::config::ADDRESS_AFFIX_LEN;
use crate::render::{ContentError, DecodeKind, RenderError};

/// UTF-8 view over a text asset
#[derive(Debug, Clone, Copy)]
pub struct TextLines<'a> {
    text: &'a str,
}

impl<'a> TextLines<'a> {
    /// Validate asset bytes as UTF-8
    pub fn parse(bytes: &'a [u8]) -> Result<Self, RenderError> {
        core::str::from_utf8(bytes)
            .map(|text| Self { text })
            .map_err(|_| RenderError::AssetDecode(DecodeKind::Text))
    }

    /// Line `index` (0-based)
    pub fn line(&self, index: usize) -> Result<&'a str, RenderError> {
        self.text
            .split('\n')
            .nth(index)
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .ok_or(RenderError::MalformedContent(ContentError::MissingLine))
    }
}

/// One `"<address> <comment>"` line of the Bitcoin asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressEntry<'a> {
    /// Everything before the first space
    pub address: &'a str,
    /// Everything from the first space on, separator included
    pub comment: &'a str,
}

impl<'a> AddressEntry<'a> {
    pub fn parse(line: &'a str) -> Result<Self, ContentError> {
        let split = line.find(' ').ok_or(ContentError::MissingSeparator)?;
        let (address, comment) = line.split_at(split);

        if address.is_empty() {
            return Err(ContentError::EmptyAddress);
        }
        if address.chars().count() < ADDRESS_AFFIX_LEN {
            return Err(ContentError::AddressTooShort);
        }

        Ok(Self { address, comment })
    }

    /// First `ADDRESS_AFFIX_LEN` characters of the address
    pub fn head(&self) -> &'a str {
        match self.address.char_indices().nth(ADDRESS_AFFIX_LEN) {
            Some((end, _)) => &self.address[..end],
            None => self.address,
        }
    }

    /// Last `ADDRESS_AFFIX_LEN` characters of the address
    pub fn tail(&self) -> &'a str {
        let count = self.address.chars().count();
        let skip = count.saturating_sub(ADDRESS_AFFIX_LEN);
        match self.address.char_indices().nth(skip) {
            Some((start, _)) => &self.address[start..],
            None => self.address,
        }
    }
}
