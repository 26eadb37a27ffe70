//! Reading candidate documents from files and streams.
//!
//! The returned value is untyped JSON; it still has to pass
//! [`validate`](crate::validate()) or [`parse_document`](crate::parse_document)
//! before anything is derived from it.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::util::decode_text;

/// Parse document JSON from raw bytes of unknown encoding.
pub fn read_document_bytes(bytes: &[u8]) -> Result<Value> {
    let text = decode_text(bytes, None);
    Ok(serde_json::from_str(&text)?)
}

/// Read document JSON from a file.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let bytes = std::fs::read(path)?;
    read_document_bytes(&bytes)
}

/// Read document JSON from any reader, e.g. stdin.
pub fn read_document_from<R: Read>(mut reader: R) -> Result<Value> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    read_document_bytes(&bytes)
}
