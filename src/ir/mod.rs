//! # Intermediate Representation (IR)
//!
//! The IR sits between templates and the printer:
//!
//! ```text
//! ┌───────────┐     ┌───────────────┐     ┌──────────┐     ┌─────────┐
//! │ Template  │ ──► │   Segments    │ ──► │  Driver  │ ──► │ Printer │
//! │ + context │     │(Vec<Segment>) │     │          │     │ handle  │
//! └───────────┘     └───────────────┘     └──────────┘     └─────────┘
//! ```
//!
//! Segments are inspectable and serializable, so a job can be previewed
//! without touching a printer.
//!
//! ## Example
//!
//! ```
//! use tp::ir::{Segment, StyleSet};
//!
//! let title = Segment::styled("HELLO\n", StyleSet::new().center().bold(true));
//! assert!(title.styles.resolve().bold);
//! ```

mod segment;

pub use segment::*;
