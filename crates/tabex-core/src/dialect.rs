//! Wire dialect: the three characters that shape a serialized row.
//!
//! # Design
//!
//! A dialect is a plain value — cheap to copy, no heap data — validated at
//! the setter, never at write time.  Each character is stored as a single
//! byte: the setters reject any string that is not exactly one byte long,
//! which also rules out multi-byte UTF-8 characters.  Every encoding the
//! writer targets is ASCII-compatible, so the bytes survive conversion
//! unchanged.
//!
//! The escape byte doubles as a mode switch: when it equals the quote byte,
//! an embedded quote is doubled (RFC 4180 style); any other value is emitted
//! in front of an embedded quote instead.

use crate::error::{TabexError, TabexResult};

/// Delimiter, quote, and escape bytes for one document.
///
/// Defaults: `,` / `"` / `\`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dialect {
    /// Byte placed between serialized fields.
    pub delimiter: u8,
    /// Byte wrapping every serialized field.
    pub quote: u8,
    /// Byte escaping an embedded quote; equal to `quote` means doubling.
    pub escape: u8,
}

impl Default for Dialect {
    fn default() -> Self {
        Self { delimiter: b',', quote: b'"', escape: b'\\' }
    }
}

impl Dialect {
    /// Set the field delimiter.  Fails unless `delimiter` is exactly one
    /// single-byte character; the previous value is kept on failure.
    pub fn set_delimiter(&mut self, delimiter: &str) -> TabexResult<&mut Self> {
        self.delimiter = single_byte("delimiter", delimiter)?;
        Ok(self)
    }

    /// Set the quote (enclosure) character.  Same validation as the
    /// delimiter setter.
    pub fn set_quote(&mut self, quote: &str) -> TabexResult<&mut Self> {
        self.quote = single_byte("quote", quote)?;
        Ok(self)
    }

    /// Set the escape character.  Same validation as the delimiter setter.
    pub fn set_escape(&mut self, escape: &str) -> TabexResult<&mut Self> {
        self.escape = single_byte("escape", escape)?;
        Ok(self)
    }

    /// True when an embedded quote is escaped by doubling it.
    #[inline]
    pub fn doubles_quotes(&self) -> bool {
        self.escape == self.quote
    }
}

fn single_byte(what: &'static str, value: &str) -> TabexResult<u8> {
    match value.as_bytes() {
        [b] => Ok(*b),
        _ => Err(TabexError::InvalidConfig {
            what,
            detail: format!("expected exactly one character, got {value:?}"),
        }),
    }
}
