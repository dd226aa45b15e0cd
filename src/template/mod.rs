//! # Template Rendering
//!
//! Turns a markdown-flavored template plus a context of variables into
//! printer-ready [`Segment`]s.
//!
//! ```text
//! template ──► {name} substitution ──► strip accents? ──► segment + wrap
//! ```
//!
//! Settings are read from a [`SettingsSource`] at the start of every
//! render, so a changed configuration applies to the very next job.
//!
//! ## Example
//!
//! ```
//! use tp::template::{Context, RenderSettings, TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new(RenderSettings::default());
//! let mut ctx = Context::new();
//! ctx.insert("name".into(), "Ada".into());
//!
//! let segments = renderer.render("Hi **{name}**", &ctx)?;
//! assert_eq!(segments[1].text, "Ada");
//! # Ok::<(), tp::TpError>(())
//! ```

pub mod letters;
pub mod markdown;
pub mod placeholder;
pub mod wrap;

use std::collections::HashMap;

use crate::error::Result;
use crate::ir::Segment;

/// Placeholder name to substitution value.
pub type Context = HashMap<String, String>;

/// Printer line width when nothing is configured.
pub const DEFAULT_CHARS_PER_LINE: usize = 32;

/// Special letters are stripped unless the configuration enables them.
pub const DEFAULT_SPECIAL_LETTERS: bool = false;

/// Settings a render depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub chars_per_line: usize,
    pub special_letters_enabled: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            chars_per_line: DEFAULT_CHARS_PER_LINE,
            special_letters_enabled: DEFAULT_SPECIAL_LETTERS,
        }
    }
}

/// Where render settings come from.
///
/// Implementations must return current values on every call; the renderer
/// never caches them.
pub trait SettingsSource {
    fn chars_per_line(&self) -> usize;

    fn special_letters_enabled(&self) -> bool;

    /// Read both settings together.
    fn snapshot(&self) -> RenderSettings {
        RenderSettings {
            chars_per_line: self.chars_per_line(),
            special_letters_enabled: self.special_letters_enabled(),
        }
    }
}

/// Fixed settings.
impl SettingsSource for RenderSettings {
    fn chars_per_line(&self) -> usize {
        self.chars_per_line
    }

    fn special_letters_enabled(&self) -> bool {
        self.special_letters_enabled
    }

    fn snapshot(&self) -> RenderSettings {
        *self
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for &T {
    fn chars_per_line(&self) -> usize {
        (**self).chars_per_line()
    }

    fn special_letters_enabled(&self) -> bool {
        (**self).special_letters_enabled()
    }

    fn snapshot(&self) -> RenderSettings {
        (**self).snapshot()
    }
}

/// Renders templates against a settings source.
#[derive(Debug, Clone)]
pub struct TemplateRenderer<S> {
    source: S,
}

impl<S: SettingsSource> TemplateRenderer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read the current settings from the source.
    pub fn reload_settings(&self) -> RenderSettings {
        self.source.snapshot()
    }

    /// Render `template` with `context` into ordered segments.
    ///
    /// Placeholders are substituted before accents are stripped, so context
    /// values are stripped too. Fails with
    /// [`TpError::MissingPlaceholder`](crate::TpError::MissingPlaceholder)
    /// if any placeholder has no value.
    pub fn render(&self, template: &str, context: &Context) -> Result<Vec<Segment>> {
        let settings = self.reload_settings();

        let mut text = placeholder::substitute(template, context)?;
        if !settings.special_letters_enabled {
            text = letters::strip_accents(&text);
        }

        Ok(markdown::segment(&text, settings.chars_per_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TpError;
    use crate::ir::StyleSet;
    use std::cell::Cell;

    /// Settings that can change between renders and count how often they are read.
    struct FakeSettings {
        chars_per_line: Cell<usize>,
        letters: Cell<bool>,
        reads: Cell<usize>,
    }

    impl FakeSettings {
        fn new(chars_per_line: usize, letters: bool) -> Self {
            Self {
                chars_per_line: Cell::new(chars_per_line),
                letters: Cell::new(letters),
                reads: Cell::new(0),
            }
        }
    }

    impl SettingsSource for FakeSettings {
        fn chars_per_line(&self) -> usize {
            self.reads.set(self.reads.get() + 1);
            self.chars_per_line.get()
        }

        fn special_letters_enabled(&self) -> bool {
            self.letters.get()
        }
    }

    fn ctx(pairs: &[(&str, &str)]) -> Context {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_missing_placeholder() {
        let renderer = TemplateRenderer::new(RenderSettings::default());
        let err = renderer.render("Hello, {name}!", &Context::new()).unwrap_err();
        assert!(matches!(err, TpError::MissingPlaceholder(ref k) if k == "name"));
    }

    #[test]
    fn test_no_placeholders_never_fails() {
        let renderer = TemplateRenderer::new(RenderSettings::default());
        for template in ["", "plain", "**bold** and *it*", "{ not a placeholder }"] {
            assert!(renderer.render(template, &Context::new()).is_ok(), "{template}");
        }
    }

    #[test]
    fn test_special_letters_disabled() {
        let settings = FakeSettings::new(32, false);
        let renderer = TemplateRenderer::new(&settings);
        let segments = renderer.render("Zażółć gęślą jaźń", &Context::new()).unwrap();
        assert_eq!(joined(&segments), "Zazolc gesla jazn");
    }

    #[test]
    fn test_special_letters_enabled_preserved() {
        let settings = FakeSettings::new(32, true);
        let renderer = TemplateRenderer::new(&settings);
        let segments = renderer.render("Zażółć gęślą jaźń", &Context::new()).unwrap();
        assert_eq!(joined(&segments), "Zażółć gęślą jaźń");
    }

    #[test]
    fn test_context_values_are_stripped() {
        let renderer = TemplateRenderer::new(RenderSettings::default());
        let segments = renderer.render("{city}", &ctx(&[("city", "Łódź")])).unwrap();
        assert_eq!(joined(&segments), "Lodz");
    }

    #[test]
    fn test_settings_reloaded_every_render() {
        let settings = FakeSettings::new(80, false);
        let renderer = TemplateRenderer::new(&settings);
        let text = "This is a very long line that should wrap correctly.";

        let wide = renderer.render(text, &Context::new()).unwrap();
        assert_eq!(wide[0].text, text);

        settings.chars_per_line.set(20);
        let narrow = renderer.render(text, &Context::new()).unwrap();
        assert_eq!(
            narrow[0].text,
            "This is a very long\nline that should\nwrap correctly."
        );

        settings.letters.set(true);
        let kept = renderer.render("ż", &Context::new()).unwrap();
        assert_eq!(kept[0].text, "ż");

        assert_eq!(settings.reads.get(), 3);
    }

    #[test]
    fn test_markdown_in_context_value_is_styled() {
        let renderer = TemplateRenderer::new(RenderSettings::default());
        let segments = renderer
            .render("Task: {t}", &ctx(&[("t", "**urgent**")]))
            .unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::plain("Task:"),
                Segment::styled("urgent", StyleSet::new().bold(true)),
            ]
        );
    }
}
