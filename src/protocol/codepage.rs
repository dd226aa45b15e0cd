//! # Code Page 852 Encoding
//!
//! Converts Unicode strings to PC852 (Latin 2) single-byte encoding so that
//! Polish letters reach the printer intact when special letters are enabled.
//!
//! The printer must be switched to PC852 (`ESC t 18`) for these bytes to
//! render correctly. ASCII (U+0000–U+007F) passes through unchanged.
//! Characters with no mapping are replaced with `?` and a warning is logged.

use tracing::warn;

/// Encode a Unicode string as PC852 bytes.
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        if (ch as u32) < 0x80 {
            out.push(ch as u8);
        } else if let Some(byte) = unicode_to_pc852(ch) {
            out.push(byte);
        } else {
            warn!(
                "pc852: unmapped character '{}' (U+{:04X}), replacing with '?'",
                ch, ch as u32
            );
            out.push(b'?');
        }
    }
    out
}

/// Map a Unicode code point to its PC852 byte value (0x80–0xFF).
///
/// Covers the Polish alphabet plus the Latin-1 letters that share a slot.
fn unicode_to_pc852(ch: char) -> Option<u8> {
    let byte = match ch {
        // Polish
        'ą' => 0xA5,
        'Ą' => 0xA4,
        'ć' => 0x86,
        'Ć' => 0x8F,
        'ę' => 0xA9,
        'Ę' => 0xA8,
        'ł' => 0x88,
        'Ł' => 0x9D,
        'ń' => 0xE4,
        'Ń' => 0xE3,
        'ó' => 0xA2,
        'Ó' => 0xE0,
        'ś' => 0x98,
        'Ś' => 0x97,
        'ź' => 0xAB,
        'Ź' => 0x8D,
        'ż' => 0xBE,
        'Ż' => 0xBD,

        // Shared Latin-1 slots
        'Ç' => 0x80,
        'ü' => 0x81,
        'é' => 0x82,
        'â' => 0x83,
        'ä' => 0x84,
        'ç' => 0x87,
        'ë' => 0x89,
        'î' => 0x8C,
        'Ä' => 0x8E,
        'É' => 0x90,
        'ô' => 0x93,
        'ö' => 0x94,
        'Ö' => 0x99,
        'Ü' => 0x9A,
        '×' => 0x9E,
        'á' => 0xA0,
        'í' => 0xA1,
        'ú' => 0xA3,
        '«' => 0xAE,
        '»' => 0xAF,
        'Á' => 0xB5,
        'Â' => 0xB6,
        '§' => 0xF5,
        '°' => 0xF8,
        'ß' => 0xE1,
        'Ô' => 0xE2,
        'Ú' => 0xE9,
        'ý' => 0xEC,
        'Ý' => 0xED,
        '÷' => 0xF6,
        _ => return None,
    };
    Some(byte)
}
