//! RTF Unicode escaping.
//!
//! RTF readers only understand 7-bit text, so every character that is a
//! control character, an RTF metacharacter (`\`, `{`, `}`) or outside ASCII
//! is written as a `\uN?` control word. `N` is the code point read as a
//! signed 16-bit value and `?` is the fallback glyph for readers that skip
//! `\u`.
//!
//! Code points are not split into UTF-16 surrogate pairs: anything above
//! `0x7FFF` is shifted down by 65536, which keeps the BMP correct and gives
//! the legacy (out-of-range) value for supplementary-plane characters.

use thiserror::Error;

/// Raised when escaped output still contains a non-ASCII byte.
///
/// This can only happen if the escape table misses a character, so callers
/// should treat it as an internal bug rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RtfEncodeError {
    #[error("non-ASCII byte 0x{byte:02x} at offset {offset} after RTF escaping")]
    NonAscii { byte: u8, offset: usize },
}

/// Whether `c` must be written as a `\uN?` escape.
pub fn needs_escape(c: char) -> bool {
    let cp = c as u32;
    cp < 0x20 || cp >= 0x80 || matches!(c, '\\' | '{' | '}')
}

/// Numeric argument of the `\u` control word for `c`.
pub fn escape_value(c: char) -> i32 {
    let cp = c as i32;
    if cp > 0x7FFF { cp - 0x1_0000 } else { cp }
}

/// Escape `text` for use inside an RTF group.
///
/// The result is guaranteed to be ASCII; a residual non-ASCII byte is
/// reported as [`RtfEncodeError::NonAscii`] instead of being replaced.
pub fn escape(text: &str) -> Result<String, RtfEncodeError> {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if needs_escape(c) {
            out.push_str(&format!("\\u{}?", escape_value(c)));
        } else {
            out.push(c);
        }
    }
    check_ascii(out.as_bytes())?;
    Ok(out)
}

/// Encode `text` into ASCII bytes suitable for embedding in an RTF fragment.
pub fn encode(text: &str) -> Result<Vec<u8>, RtfEncodeError> {
    escape(text).map(String::into_bytes)
}

fn check_ascii(bytes: &[u8]) -> Result<(), RtfEncodeError> {
    match bytes.iter().position(|b| !b.is_ascii()) {
        Some(offset) => Err(RtfEncodeError::NonAscii {
            byte: bytes[offset],
            offset,
        }),
        None => Ok(()),
    }
}
