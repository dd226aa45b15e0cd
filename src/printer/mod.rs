//! # Printer Module
//!
//! Printer handles and the driver that replays segments on them.
//!
//! ## Modules
//!
//! - [`handle`]: the [`PrinterHandle`] capability trait
//! - [`network`]: raw ESC/POS over TCP
//! - [`recording`]: in-memory printer for tests and dry runs
//! - [`driver`]: `print_segments` and the canned jobs

pub mod driver;
pub mod handle;
pub mod network;
pub mod recording;

pub use driver::{print_job, print_segments, print_small_note, print_task, print_template, print_ticket};
pub use handle::PrinterHandle;
pub use network::NetworkPrinter;
pub use recording::{PrinterCall, RecordingPrinter};
