//! # tp - Thermal Printer Toolkit
//!
//! tp sends short documents to a networked ESC/POS receipt printer. It
//! provides:
//!
//! - **Templates**: `{name}` placeholders, inline markdown and word wrapping
//! - **Canned receipts**: task, ticket and small note layouts
//! - **Driver**: replays styled segments on any [`PrinterHandle`]
//! - **Transport**: raw TCP on port 9100
//! - **Adapters**: a CLI and a JSON web API sharing one settings file
//!
//! ## Quick Start
//!
//! ```no_run
//! use tp::{
//!     NetworkPrinter, PrinterHandle,
//!     printer,
//!     template::{Context, RenderSettings, TemplateRenderer},
//! };
//!
//! let renderer = TemplateRenderer::new(RenderSettings::default());
//! let mut ctx = Context::new();
//! ctx.insert("who".into(), "team".into());
//!
//! let mut handle = NetworkPrinter::open("192.168.1.100")?;
//! printer::print_template(&renderer, &mut handle, "Hello **{who}**!", &ctx)?;
//! handle.close()?;
//!
//! # Ok::<(), tp::TpError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`template`] | Placeholder substitution, accent stripping, markdown segmentation |
//! | [`ir`] | Segments and style sets |
//! | [`receipt`] | Task, ticket and small note builders |
//! | [`printer`] | Printer handles and the print driver |
//! | [`protocol`] | ESC/POS command builders and code page |
//! | [`config`] | TOML settings file |
//! | [`server`] | HTTP adapter |
//! | [`error`] | Error types |

pub mod config;
pub mod error;
pub mod ir;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod server;
pub mod template;

// Re-exports for convenience
pub use error::TpError;
pub use ir::{Segment, StyleSet};
pub use printer::{NetworkPrinter, PrinterHandle, RecordingPrinter};
pub use template::TemplateRenderer;
