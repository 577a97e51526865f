//! Pre-pass that rewrites known shorthands to their canonical display
//! forms before any casing policy runs.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::types::StyleLexicon;

// Letters-and-hyphens cores only; an optional opening paren before and
// closing paren / question mark after travel with the token.
static SHORTHAND_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\()?(\b[a-zA-Z\-]+\b)(\)?\??)").unwrap());

/// Rewrite every recognized shorthand in `text` to canonical form.
///
/// Family names are left exactly as written. Unknown tokens pass through,
/// so the result is stable under repeated application.
pub fn normalize_shorthands(text: &str, lexicon: &StyleLexicon) -> String {
    if text.is_empty() {
        return text.to_string();
    }

    SHORTHAND_TOKEN
        .replace_all(text, |caps: &Captures<'_>| {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            let core = caps.get(2).map_or("", |m| m.as_str());
            let suffix = caps.get(3).map_or("", |m| m.as_str());

            if lexicon.is_brand_token(core) {
                return caps[0].to_string();
            }
            format!("{prefix}{}{suffix}", lexicon.lookup(core).unwrap_or(core))
        })
        .into_owned()
}
