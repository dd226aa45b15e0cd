//! # ESC/POS Printer Control Commands
//!
//! Initialization, paper feed and cutter commands for ESC/POS network
//! receipt printers (Epson TM series and the many compatibles listening on
//! TCP port 9100).
//!
//! ## Escape Sequence Structure
//!
//! - Two bytes: `ESC @`
//! - With parameters: `ESC d n`, `GS V m`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size and cutter control.
pub const GS: u8 = 0x1D;

/// Lines fed before cutting so the last printed line clears the blade.
pub const CUT_FEED_LINES: u8 = 6;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets every text mode to its power-on
/// default.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ## Example
///
/// ```
/// use tp::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints whatever sits in the line buffer, then feeds `n` lines.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC d n |
/// | Hex     | 1B 64 n |
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Full Cut (GS V 0)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS V 0 |
/// | Hex     | 1D 56 00 |
///
/// Only effective at the beginning of a line, so callers feed first.
#[inline]
pub fn cut_full() -> Vec<u8> {
    vec![GS, b'V', 0]
}

/// Feed [`CUT_FEED_LINES`] lines, then full cut.
///
/// ## Example
///
/// ```
/// use tp::protocol::commands;
///
/// assert_eq!(commands::cut_full_feed(), vec![0x1B, 0x64, 6, 0x1D, 0x56, 0]);
/// ```
pub fn cut_full_feed() -> Vec<u8> {
    let mut out = feed_lines(CUT_FEED_LINES);
    out.extend(cut_full());
    out
}

// ============================================================================
// TESTS
// ============================================================================
