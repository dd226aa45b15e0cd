//! # Receipt Builders
//!
//! Canned documents: task, ticket and small note.
//!
//! These skip the markdown step. Titles, ticket numbers and body text go in
//! as single pre-styled segments, unwrapped and uninterpreted. Each
//! builder only assembles segments; the cut is issued by the driver (see
//! [`crate::printer::print_task`] and friends).

use crate::ir::{Segment, StyleSet};
use crate::protocol::text::Font;

/// Separator printed under titles.
pub const SEPARATOR: &str = "-----------------------";

/// Lines fed by a small note.
pub const SMALL_NOTE_LINES: usize = 7;

// ============================================================================
// STYLES
// ============================================================================

fn title_style() -> StyleSet {
    StyleSet::new()
        .center()
        .font(Font::A)
        .bold(true)
        .double()
}

fn ticket_number_style() -> StyleSet {
    StyleSet::new()
        .center()
        .font(Font::B)
        .bold(false)
        .underline(true)
        .double()
}

fn body_style() -> StyleSet {
    StyleSet::new().left().font(Font::A).bold(false)
}

fn separator() -> Segment {
    Segment::styled(format!("{}\n\n", SEPARATOR), title_style())
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Build a task: optional big centered title with a separator, then the text.
///
/// ```
/// use tp::receipt::build_task;
///
/// let segments = build_task("Buy milk", "2 liters");
/// assert_eq!(segments.len(), 4);
/// assert_eq!(segments[1].text, "Buy milk\n");
/// ```
pub fn build_task(title: &str, text: &str) -> Vec<Segment> {
    let mut segments = vec![Segment::plain("\n")];

    if !title.is_empty() {
        segments.push(Segment::styled(format!("{}\n", title), title_style()));
        segments.push(separator());
    }

    segments.push(Segment::styled(format!("{}\n", text), body_style()));
    segments
}

/// Build a ticket: optional title, optional underlined ticket number in the
/// alternate font, a separator, then the text.
///
/// With neither title nor number, two blank lines take their place.
pub fn build_ticket(title: &str, ticket_number: &str, text: &str) -> Vec<Segment> {
    let mut segments = vec![Segment::plain("\n")];

    if !title.is_empty() {
        segments.push(Segment::styled(format!("{}\n", title), title_style()));
    }
    if !ticket_number.is_empty() {
        segments.push(Segment::styled(
            format!("{}\n", ticket_number),
            ticket_number_style(),
        ));
    }
    if title.is_empty() && ticket_number.is_empty() {
        segments.push(Segment::plain("\n\n"));
    }

    segments.push(separator());
    segments.push(Segment::styled(format!("{}\n", text), body_style()));
    segments
}

/// Build a small note: blank paper to write on.
pub fn build_small_note() -> Vec<Segment> {
    vec![Segment::plain("\n".repeat(SMALL_NOTE_LINES))]
}
