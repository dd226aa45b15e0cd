//! # ESC/POS Text Styling Commands
//!
//! This module implements the text formatting commands a receipt job needs.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC a n | Left / center / right |
//! | Font | ESC M n | Font A (12×24) or Font B (9×17) |
//! | Bold | ESC E n | **Emphasized** text |
//! | Underline | ESC - n | Underlined text |
//! | Size | GS ! n | Double width and/or double height |
//!
//! Every command here is absolute (it sets a mode rather than toggling it),
//! so replaying a full style before each run of text always leaves the
//! printer in a known state.

use serde::{Deserialize, Serialize};

use super::commands::{ESC, GS};
use crate::ir::ResolvedStyle;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Justification (ESC a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// Takes effect at the start of the next line.
///
/// ## Example
///
/// ```
/// use tp::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    /// Font A: 12×24 dots
    #[default]
    A = 0,
    /// Font B: 9×17 dots, the alternate (code) font
    B = 1,
}

/// # Select Character Font (ESC M n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// EMPHASIS AND UNDERLINE
// ============================================================================

/// # Turn Emphasized Mode On/Off (ESC E n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E n |
/// | Hex     | 1B 45 n |
#[inline]
pub fn bold(enabled: bool) -> Vec<u8> {
    vec![ESC, b'E', enabled as u8]
}

/// # Turn Underline Mode On/Off (ESC - n)
///
/// `n = 1` draws a one-dot underline. Spaces and tabs are not underlined.
#[inline]
pub fn underline(enabled: bool) -> Vec<u8> {
    vec![ESC, b'-', enabled as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Select Character Size (GS ! n)
///
/// | Bits | Meaning |
/// |------|---------|
/// | 4-7  | width multiplier - 1 |
/// | 0-3  | height multiplier - 1 |
///
/// Only 1x and 2x are used here.
///
/// ## Example
///
/// ```
/// use tp::protocol::text::size;
///
/// assert_eq!(size(true, true), vec![0x1D, 0x21, 0x11]);
/// assert_eq!(size(false, false), vec![0x1D, 0x21, 0x00]);
/// ```
pub fn size(double_width: bool, double_height: bool) -> Vec<u8> {
    let mut n = 0u8;
    if double_width {
        n |= 0x10;
    }
    if double_height {
        n |= 0x01;
    }
    vec![GS, b'!', n]
}

// ============================================================================
// CODE TABLE
// ============================================================================

/// # Select Character Code Table (ESC t n)
///
/// Table 18 is PC852 (Latin 2) on Epson-compatible printers.
pub const CODE_TABLE_PC852: u8 = 18;

#[inline]
pub fn code_table(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// FULL STYLE
// ============================================================================

/// Generate command bytes setting all six attributes of a resolved style.
///
/// Order: alignment, font, bold, underline, size.
pub fn style(s: &ResolvedStyle) -> Vec<u8> {
    let mut cmds = Vec::with_capacity(15);
    cmds.extend(align(s.align));
    cmds.extend(font(s.font));
    cmds.extend(bold(s.bold));
    cmds.extend(underline(s.underline));
    cmds.extend(size(s.double_width, s.double_height));
    cmds
}

// ============================================================================
// TESTS
// ============================================================================
