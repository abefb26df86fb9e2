// Unicode escape conversion
//
// Everything outside printable ASCII, and the backslash itself, is written as
// backslash-u plus four hex digits (UTF-16 code units, so astral characters take
// two escapes). Escaping the backslash keeps decode(encode(text)) == text.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::replacer::reverse_replace;
use super::EngineError;
use crate::dictionary::DictionaryEntry;

/// Length of one escape: backslash, `u`, four hex digits
const ESCAPE_LEN: usize = 6;

/// Hex digit case used when encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// Encode with lowercase hex digits
pub fn to_unicode(text: &str) -> String {
    to_unicode_with_case(text, HexCase::Lower)
}

pub fn to_unicode_with_case(text: &str, case: HexCase) -> String {
    let mut out = String::with_capacity(text.len());
    let mut units = [0u16; 2];

    for ch in text.chars() {
        if is_printable_ascii(ch) && ch != '\\' {
            out.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            // Writing to a String cannot fail
            let _ = match case {
                HexCase::Lower => write!(out, "\\u{:04x}", unit),
                HexCase::Upper => write!(out, "\\u{:04X}", unit),
            };
        }
    }

    out
}

/// Decode escapes back to characters
///
/// A backslash followed by `u` must start a well-formed escape; any other
/// backslash is kept as a literal. Surrogate escapes must come as a high/low pair.
pub fn from_unicode(text: &str) -> Result<String, EngineError> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' || bytes.get(i + 1) != Some(&b'u') {
            i += 1;
            continue;
        }
        out.push_str(&text[literal_start..i]);

        let start = i;
        let unit = read_escape(text, i)?;
        i += ESCAPE_LEN;

        let ch = match unit {
            0xD800..=0xDBFF => {
                let low = read_escape(text, i)
                    .ok()
                    .filter(|low| (0xDC00..=0xDFFF).contains(low));
                let Some(low) = low else {
                    return Err(malformed(text, start, ESCAPE_LEN));
                };
                i += ESCAPE_LEN;
                let code = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                char::from_u32(code).ok_or_else(|| malformed(text, start, 2 * ESCAPE_LEN))?
            }
            0xDC00..=0xDFFF => return Err(malformed(text, start, ESCAPE_LEN)),
            _ => char::from_u32(u32::from(unit)).ok_or_else(|| malformed(text, start, ESCAPE_LEN))?,
        };

        out.push(ch);
        literal_start = i;
    }

    out.push_str(&text[literal_start..]);
    Ok(out)
}

/// Decode escapes, then undo the dictionary replacement
pub fn unicode_to_text_and_reverse_replace(
    text: &str,
    dictionary: &[DictionaryEntry],
) -> Result<String, EngineError> {
    let decoded = from_unicode(text)?;
    Ok(reverse_replace(&decoded, dictionary))
}

fn is_printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// Read the code unit of the escape starting at byte `at`
fn read_escape(text: &str, at: usize) -> Result<u16, EngineError> {
    let rest = &text.as_bytes()[at..];
    let well_formed = rest.len() >= ESCAPE_LEN
        && rest[0] == b'\\'
        && rest[1] == b'u'
        && rest[2..ESCAPE_LEN].iter().all(u8::is_ascii_hexdigit);
    if !well_formed {
        return Err(malformed(text, at, ESCAPE_LEN));
    }
    u16::from_str_radix(&text[at + 2..at + ESCAPE_LEN], 16)
        .map_err(|_| malformed(text, at, ESCAPE_LEN))
}

fn malformed(text: &str, offset: usize, max_chars: usize) -> EngineError {
    EngineError::Format {
        offset,
        fragment: text[offset..].chars().take(max_chars).collect(),
    }
}

#[cfg(test)]
#[path = "unicode_test.rs"]
mod tests;
