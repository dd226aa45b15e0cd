//! Inline markdown segmentation.
//!
//! Only six inline markers are recognized, tried in this order when two
//! could start at the same position:
//!
//! | Marker | Style |
//! |--------|-------|
//! | `**text**` | bold |
//! | `__text__` | bold |
//! | `*text*` | italic |
//! | `_text_` | italic |
//! | `~~text~~` | underline |
//! | `` `text` `` | font B |
//!
//! Markers never span a newline. A pair with nothing between them (`****`,
//! `**`) still counts and yields an empty styled segment. Anything that does
//! not close is printed literally.

use std::sync::LazyLock;

use regex::Regex;

use super::wrap::fill;
use crate::ir::{Segment, StyleSet};
use crate::protocol::text::Font;

/// One alternative per capture group, in priority order.
static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.*?)\*\*|__(.*?)__|\*(.*?)\*|_(.*?)_|~~(.*?)~~|`(.*?)`").unwrap()
});

/// Inline marker kinds, indexed by capture group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Bold,
    Italic,
    Underline,
    Code,
}

const GROUPS: [Marker; 6] = [
    Marker::Bold,
    Marker::Bold,
    Marker::Italic,
    Marker::Italic,
    Marker::Underline,
    Marker::Code,
];

impl Marker {
    fn style(self) -> StyleSet {
        match self {
            Marker::Bold => StyleSet::new().bold(true),
            Marker::Italic => StyleSet::new().italic(true),
            Marker::Underline => StyleSet::new().underline(true),
            Marker::Code => StyleSet::new().font(Font::B),
        }
    }
}

/// Split `text` into plain and styled segments, left to right.
///
/// Each segment is wrapped to `chars_per_line` on its own, so a styled run
/// starts its own block rather than flowing with the plain text around it.
/// Empty input gives no segments.
///
/// ```
/// use tp::ir::{Segment, StyleSet};
/// use tp::template::markdown::segment;
///
/// assert_eq!(
///     segment("**bold**", 80),
///     vec![Segment::styled("bold", StyleSet::new().bold(true))]
/// );
/// ```
pub fn segment(text: &str, chars_per_line: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = INLINE.captures_at(text, pos) else {
            segments.push(Segment::plain(fill(&text[pos..], chars_per_line)));
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if whole.start() > pos {
            segments.push(Segment::plain(fill(
                &text[pos..whole.start()],
                chars_per_line,
            )));
        }

        let matched = GROUPS
            .iter()
            .enumerate()
            .find_map(|(i, marker)| caps.get(i + 1).map(|m| (m.as_str(), *marker)));
        if let Some((inner, marker)) = matched {
            segments.push(Segment::styled(fill(inner, chars_per_line), marker.style()));
        }

        pos = whole.end();
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bold(text: &str) -> Segment {
        Segment::styled(text, StyleSet::new().bold(true))
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("", 32).is_empty());
    }

    #[test]
    fn test_plain_text_single_segment() {
        let text = "This is a very long line that should wrap correctly.";
        let segments = segment(text, 20);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].styles.is_empty());
        assert_eq!(segments[0].text, fill(text, 20));
    }

    #[test]
    fn test_only_bold() {
        assert_eq!(segment("**bold**", 80), vec![bold("bold")]);
    }

    #[test]
    fn test_surrounding_text() {
        assert_eq!(
            segment("Hello **world**!", 80),
            vec![Segment::plain("Hello"), bold("world"), Segment::plain("!")]
        );
    }

    #[test]
    fn test_every_marker() {
        let cases = [
            ("**x**", StyleSet::new().bold(true)),
            ("__x__", StyleSet::new().bold(true)),
            ("*x*", StyleSet::new().italic(true)),
            ("_x_", StyleSet::new().italic(true)),
            ("~~x~~", StyleSet::new().underline(true)),
            ("`x`", StyleSet::new().font(Font::B)),
        ];
        for (input, style) in cases {
            assert_eq!(segment(input, 32), vec![Segment::styled("x", style)], "{input}");
        }
    }

    #[test]
    fn test_bold_wins_over_italic() {
        let segments = segment("**a** *b*", 32);
        assert_eq!(segments[0], bold("a"));
        assert_eq!(segments[2], Segment::styled("b", StyleSet::new().italic(true)));
    }

    #[test]
    fn test_earliest_marker_wins() {
        let segments = segment("`code` then **bold**", 32);
        assert_eq!(segments[0].styles.font, Some(Font::B));
        assert_eq!(segments[0].text, "code");
        assert_eq!(segments[2], bold("bold"));
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        assert_eq!(segment("a * b", 32), vec![Segment::plain("a * b")]);
        assert_eq!(segment("price: 5*", 32), vec![Segment::plain("price: 5*")]);
        assert_eq!(segment("~~a", 32), vec![Segment::plain("~~a")]);
    }

    #[test]
    fn test_empty_marker_pair_kept_as_empty_segment() {
        assert_eq!(segment("****", 32), vec![bold("")]);
        assert_eq!(
            segment("a ** b", 32),
            vec![
                Segment::plain("a"),
                Segment::styled("", StyleSet::new().italic(true)),
                Segment::plain(" b"),
            ]
        );
        assert_eq!(
            segment("**a*", 32),
            vec![
                Segment::styled("", StyleSet::new().italic(true)),
                Segment::plain("a*"),
            ]
        );
    }

    #[test]
    fn test_marker_does_not_span_lines() {
        assert_eq!(
            segment("*one\ntwo*", 32),
            vec![Segment::plain("*one\ntwo*")]
        );
    }

    #[test]
    fn test_whitespace_between_runs_kept_as_empty_segment() {
        assert_eq!(
            segment("**a** **b**", 32),
            vec![bold("a"), Segment::plain(""), bold("b")]
        );
    }

    #[test]
    fn test_styled_run_wraps_independently() {
        assert_eq!(
            segment("Hi **bold text here** end", 10),
            vec![
                Segment::plain("Hi"),
                bold("bold text\nhere"),
                Segment::plain(" end"),
            ]
        );
    }

    #[test]
    fn test_underscores_in_words() {
        let segments = segment("snake_case_name", 32);
        assert_eq!(
            segments,
            vec![
                Segment::plain("snake"),
                Segment::styled("case", StyleSet::new().italic(true)),
                Segment::plain("name"),
            ]
        );
    }
}
