//! The capability set every printer backend provides.

use crate::error::Result;
use crate::ir::ResolvedStyle;

/// An open connection to one printer.
///
/// A handle carries style state between calls, so it must not be shared by
/// two jobs at once. Callers hold it (or a lock around it) for a whole job.
/// Opening is backend specific, see [`NetworkPrinter::open`](super::NetworkPrinter::open).
pub trait PrinterHandle {
    /// Apply all six style attributes.
    fn apply_style(&mut self, style: &ResolvedStyle) -> Result<()>;

    /// Emit text in the current style. No newline is added.
    fn emit_text(&mut self, text: &str) -> Result<()>;

    /// Feed and cut the paper.
    fn cut(&mut self) -> Result<()>;

    /// Flush and release the connection.
    fn close(&mut self) -> Result<()>;
}
