//! # Segments and Styles
//!
//! A [`Segment`] is one styled run of text, sent to the printer as a unit.
//! Its [`StyleSet`] is sparse: every field that is `None` falls back to its
//! own default when the driver resolves it, and nothing carries over from
//! the previous segment.

use serde::{Deserialize, Serialize};

use crate::protocol::text::{Alignment, Font};

/// Sparse style attributes attached to a segment.
///
/// `italic` is recorded from `*text*` / `_text_` markers but has no printer
/// counterpart, so it does not survive [`StyleSet::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_width: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_height: Option<bool>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, a: Alignment) -> Self {
        self.align = Some(a);
        self
    }

    pub fn center(self) -> Self {
        self.align(Alignment::Center)
    }

    pub fn left(self) -> Self {
        self.align(Alignment::Left)
    }

    pub fn font(mut self, f: Font) -> Self {
        self.font = Some(f);
        self
    }

    pub fn bold(mut self, enabled: bool) -> Self {
        self.bold = Some(enabled);
        self
    }

    pub fn italic(mut self, enabled: bool) -> Self {
        self.italic = Some(enabled);
        self
    }

    pub fn underline(mut self, enabled: bool) -> Self {
        self.underline = Some(enabled);
        self
    }

    /// Double width and double height together.
    pub fn double(mut self) -> Self {
        self.double_width = Some(true);
        self.double_height = Some(true);
        self
    }

    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fill every unset attribute with its default.
    pub fn resolve(&self) -> ResolvedStyle {
        ResolvedStyle {
            align: self.align.unwrap_or_default(),
            font: self.font.unwrap_or_default(),
            bold: self.bold.unwrap_or(false),
            underline: self.underline.unwrap_or(false),
            double_width: self.double_width.unwrap_or(false),
            double_height: self.double_height.unwrap_or(false),
        }
    }
}

/// The complete six-attribute style applied to the printer before each run.
///
/// `ResolvedStyle::default()` is the reset state: left, font A, everything off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub align: Alignment,
    pub font: Font,
    pub bold: bool,
    pub underline: bool,
    pub double_width: bool,
    pub double_height: bool,
}

/// One styled run of text.
///
/// `text` is already wrapped and may contain newlines. An empty `text` is
/// legal and is kept in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(default)]
    pub styles: StyleSet,
}

impl Segment {
    /// A segment with no styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: StyleSet::default(),
        }
    }

    pub fn styled(text: impl Into<String>, styles: StyleSet) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style_resolves_to_defaults() {
        let resolved = StyleSet::new().resolve();
        assert_eq!(resolved, ResolvedStyle::default());
        assert_eq!(resolved.align, Alignment::Left);
        assert_eq!(resolved.font, Font::A);
        assert!(!resolved.bold);
        assert!(!resolved.underline);
        assert!(!resolved.double_width);
        assert!(!resolved.double_height);
    }

    #[test]
    fn test_each_field_defaults_independently() {
        let resolved = StyleSet::new().bold(true).resolve();
        assert!(resolved.bold);
        assert_eq!(resolved.align, Alignment::Left);
        assert_eq!(resolved.font, Font::A);

        let resolved = StyleSet::new().font(Font::B).center().resolve();
        assert_eq!(resolved.font, Font::B);
        assert_eq!(resolved.align, Alignment::Center);
        assert!(!resolved.bold);
    }

    #[test]
    fn test_italic_does_not_reach_printer() {
        let resolved = StyleSet::new().italic(true).resolve();
        assert_eq!(resolved, ResolvedStyle::default());
    }

    #[test]
    fn test_is_empty() {
        assert!(StyleSet::new().is_empty());
        assert!(!StyleSet::new().underline(false).is_empty());
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let seg = Segment::styled("bold", StyleSet::new().bold(true));
        let json = serde_json::to_string(&seg).unwrap();
        assert_eq!(json, r#"{"text":"bold","styles":{"bold":true}}"#);

        let seg = Segment::styled("x", StyleSet::new().font(Font::B).center());
        let json = serde_json::to_string(&seg).unwrap();
        assert_eq!(json, r#"{"text":"x","styles":{"align":"center","font":"b"}}"#);
    }

    #[test]
    fn test_deserialize_missing_styles() {
        let seg: Segment = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(seg, Segment::plain("hi"));
    }
}
