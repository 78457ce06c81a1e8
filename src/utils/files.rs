//! Source reading
//!
//! Arabic text files frequently start with a UTF-8 byte order mark, which
//! the engine would otherwise render as a space. Everything here decodes
//! strictly: invalid UTF-8 is an error carrying the offending byte offset,
//! never a lossy replacement.
//!
//! Filesystem and stdin access is only compiled for native targets; the
//! WASM build gets [`decode_source`] alone.

use crate::utils::error::TranslitResult;

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

const BOM: char = '\u{FEFF}';

/// Decode raw bytes as UTF-8, dropping a leading byte order mark
pub fn decode_source(bytes: Vec<u8>) -> TranslitResult<String> {
    let text = String::from_utf8(bytes)?;
    Ok(match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Read a source file
#[cfg(not(target_arch = "wasm32"))]
pub fn read_source(path: impl AsRef<Path>) -> TranslitResult<String> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_source(bytes)
}

/// Read all of standard input
#[cfg(not(target_arch = "wasm32"))]
pub fn read_stdin() -> TranslitResult<String> {
    use std::io::Read;

    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    decode_source(bytes)
}
