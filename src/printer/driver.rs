//! Replays segments against a printer handle.
//!
//! Before every segment the driver applies that segment's fully resolved
//! style, so no attribute leaks from one segment into the next. After the
//! sequence the printer is always put back into the default style.

use super::PrinterHandle;
use crate::error::Result;
use crate::ir::{ResolvedStyle, Segment};
use crate::receipt;
use crate::template::{Context, SettingsSource, TemplateRenderer};

/// Apply each segment's style then emit its text, then reset the style.
///
/// The reset happens even for an empty sequence. The first handle error
/// aborts the job and is returned unchanged.
pub fn print_segments<P: PrinterHandle + ?Sized>(segments: &[Segment], printer: &mut P) -> Result<()> {
    for segment in segments {
        printer.apply_style(&segment.styles.resolve())?;
        printer.emit_text(&segment.text)?;
    }
    printer.apply_style(&ResolvedStyle::default())
}

/// Print `segments` and cut once.
pub fn print_job<P: PrinterHandle + ?Sized>(segments: &[Segment], printer: &mut P) -> Result<()> {
    print_segments(segments, printer)?;
    printer.cut()
}

pub fn print_task<P: PrinterHandle + ?Sized>(printer: &mut P, title: &str, text: &str) -> Result<()> {
    print_job(&receipt::build_task(title, text), printer)
}

pub fn print_ticket<P: PrinterHandle + ?Sized>(
    printer: &mut P,
    title: &str,
    ticket_number: &str,
    text: &str,
) -> Result<()> {
    print_job(&receipt::build_ticket(title, ticket_number, text), printer)
}

pub fn print_small_note<P: PrinterHandle + ?Sized>(printer: &mut P) -> Result<()> {
    print_job(&receipt::build_small_note(), printer)
}

/// Render a template and print it.
///
/// Rendering finishes before the first printer call, so a missing
/// placeholder leaves the printer untouched.
pub fn print_template<S, P>(
    renderer: &TemplateRenderer<S>,
    printer: &mut P,
    template: &str,
    context: &Context,
) -> Result<()>
where
    S: SettingsSource,
    P: PrinterHandle + ?Sized,
{
    let segments = renderer.render(template, context)?;
    print_job(&segments, printer)
}
