//! # Recording Printer
//!
//! A [`PrinterHandle`] that records every call instead of printing. Used by
//! tests and by `--dry-run` to show what a job would send.

use super::PrinterHandle;
use crate::error::{Result, TpError};
use crate::ir::ResolvedStyle;

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterCall {
    ApplyStyle(ResolvedStyle),
    EmitText(String),
    Cut,
    Close,
}

/// In-memory printer.
///
/// ## Example
///
/// ```
/// use tp::printer::{PrinterCall, PrinterHandle, RecordingPrinter};
///
/// let mut printer = RecordingPrinter::new();
/// printer.emit_text("hello")?;
/// printer.cut()?;
/// assert_eq!(printer.transcript(), "hello");
/// assert_eq!(printer.cuts(), 1);
/// # Ok::<(), tp::TpError>(())
/// ```
#[derive(Debug, Default)]
pub struct RecordingPrinter {
    calls: Vec<PrinterCall>,
    fail_text: Option<String>,
    fail_style: Option<String>,
}

impl RecordingPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A printer whose text emission fails with `message`.
    pub fn failing_text(message: impl Into<String>) -> Self {
        Self {
            fail_text: Some(message.into()),
            ..Self::default()
        }
    }

    /// A printer whose style changes fail with `message`.
    pub fn failing_style(message: impl Into<String>) -> Self {
        Self {
            fail_style: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[PrinterCall] {
        &self.calls
    }

    /// Every emitted text, concatenated.
    pub fn transcript(&self) -> String {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PrinterCall::EmitText(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Styles applied, in order.
    pub fn styles(&self) -> Vec<ResolvedStyle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PrinterCall::ApplyStyle(style) => Some(*style),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PrinterCall::EmitText(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn cuts(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, PrinterCall::Cut))
            .count()
    }
}

impl PrinterHandle for RecordingPrinter {
    fn apply_style(&mut self, style: &ResolvedStyle) -> Result<()> {
        if let Some(message) = &self.fail_style {
            return Err(TpError::Transport(message.clone()));
        }
        self.calls.push(PrinterCall::ApplyStyle(*style));
        Ok(())
    }

    fn emit_text(&mut self, text: &str) -> Result<()> {
        if let Some(message) = &self.fail_text {
            return Err(TpError::Transport(message.clone()));
        }
        self.calls.push(PrinterCall::EmitText(text.to_string()));
        Ok(())
    }

    fn cut(&mut self) -> Result<()> {
        self.calls.push(PrinterCall::Cut);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.calls.push(PrinterCall::Close);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut printer = RecordingPrinter::new();
        printer.apply_style(&ResolvedStyle::default()).unwrap();
        printer.emit_text("a").unwrap();
        printer.cut().unwrap();
        printer.close().unwrap();

        assert_eq!(
            printer.calls(),
            &[
                PrinterCall::ApplyStyle(ResolvedStyle::default()),
                PrinterCall::EmitText("a".into()),
                PrinterCall::Cut,
                PrinterCall::Close,
            ]
        );
    }

    #[test]
    fn test_failing_text() {
        let mut printer = RecordingPrinter::failing_text("Printer error");
        let err = printer.emit_text("x").unwrap_err();
        assert_eq!(err.to_string(), "Transport error: Printer error");
        assert!(printer.calls().is_empty());
    }

    #[test]
    fn test_failing_style() {
        let mut printer = RecordingPrinter::failing_style("Cover open");
        let err = printer.apply_style(&ResolvedStyle::default()).unwrap_err();
        assert_eq!(err.to_string(), "Transport error: Cover open");
        printer.emit_text("still works").unwrap();
        assert_eq!(printer.texts(), vec!["still works"]);
    }
}
