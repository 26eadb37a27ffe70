//! Decoding document files of unknown encoding.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Turn raw document bytes into text for the JSON parser.
///
/// Editor exports are UTF-8, possibly behind a BOM (UTF-16 BOMs are
/// honored too). Anything else is decoded with `hint_encoding` when it
/// names a known label, or else as Windows-1252, so legacy exports still
/// parse instead of failing on a stray byte.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (text, _, malformed) = UTF_8.decode(bytes);
    if !malformed {
        return text;
    }

    let fallback = hint_encoding
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(WINDOWS_1252);
    log::debug!("document is not UTF-8, decoding as {}", fallback.name());
    fallback.decode(bytes).0
}
