//! # ESC/POS Protocol
//!
//! Low-level command builders for ESC/POS network receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer control (init, feed, cut)
//! - [`text`]: Text styling (alignment, font, bold, underline, size)
//! - [`codepage`]: Unicode to PC852 text encoding
//!
//! ## Usage Example
//!
//! ```
//! use tp::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::bold(true));
//! data.extend(b"TICKET\n");
//! data.extend(text::bold(false));
//! data.extend(commands::cut_full_feed());
//! ```

pub mod codepage;
pub mod commands;
pub mod text;
