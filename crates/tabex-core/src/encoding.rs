//! Target-encoding resolution and field conversion.
//!
//! Labels are stored verbatim by the document and resolved here, once per
//! write call, against the WHATWG label registry (`encoding_rs`).  A field
//! that cannot be represented in the target encoding fails the whole write —
//! there is no replacement-character fallback.

use std::borrow::Cow;

pub use encoding_rs::Encoding;

use crate::error::{TabexError, TabexResult};

/// Resolve an encoding label (e.g. `"utf-8"`, `"windows-1252"`).
pub fn resolve(label: &str) -> TabexResult<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| TabexError::UnknownEncoding(label.to_owned()))
}

/// Convert one field value into `encoding`.
///
/// Borrows the input when the conversion is an identity (the common UTF-8 →
/// UTF-8 case); fails with [`TabexError::Unencodable`] when any character has
/// no representation in the target.
pub fn encode_field<'a>(text: &'a str, encoding: &'static Encoding) -> TabexResult<Cow<'a, [u8]>> {
    let (bytes, _, lossy) = encoding.encode(text);
    if lossy {
        return Err(TabexError::Unencodable { encoding: encoding.name().to_owned() });
    }
    Ok(bytes)
}
