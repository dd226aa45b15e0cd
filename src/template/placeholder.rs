//! `{name}` placeholder substitution.
//!
//! Placeholders are identifiers in single braces. `{{` and `}}` print a
//! literal brace; any other brace is left as it is.

use std::sync::LazyLock;

use regex::Regex;

use super::Context;
use crate::error::{Result, TpError};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Replace every placeholder with its context value.
///
/// Fails on the first placeholder without a value; nothing is returned in
/// that case. Unused context entries are ignored and substituted values are
/// not scanned again.
pub fn substitute(template: &str, context: &Context) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);

        match caps.get(1) {
            Some(name) => {
                let value = context
                    .get(name.as_str())
                    .ok_or_else(|| TpError::MissingPlaceholder(name.as_str().to_string()))?;
                out.push_str(value);
            }
            // Escaped brace: keep one of the pair
            None => out.push_str(&whole.as_str()[..1]),
        }

        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}
