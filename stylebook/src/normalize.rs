//! Word-shape helpers shared by the case transformers and the shorthand pass.
//!
//! Policy:
//! - A word's "core" keeps alphanumerics, '-' and '_'; everything else is
//!   edge punctuation.
//! - Edge splitting locates the first occurrence of the core's first
//!   character and the last occurrence of its last character, so interior
//!   punctuation stays inside the core slice.
//!
//! Keep this logic single-sourced so the three casing policies cannot drift.

/// Strip everything but alphanumerics, hyphens, and underscores.
pub fn clean_core(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Split a word into (edge prefix, core slice, edge suffix).
///
/// Returns `None` when the word has no core characters at all.
pub fn split_edges(word: &str) -> Option<(&str, &str, &str)> {
    let core = clean_core(word);
    let first = core.chars().next()?;
    let last = core.chars().last()?;
    let start = word.find(first)?;
    let end = word.rfind(last)?;
    let end_excl = end + last.len_utf8();
    Some((&word[..start], &word[start..end_excl], &word[end_excl..]))
}

/// True when the word has at least one cased character and none lowercase.
pub fn is_all_upper(word: &str) -> bool {
    let mut cased = false;
    for ch in word.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// True when the word closes a sentence ('.', '!' or '?' after trailing
/// whitespace is dropped).
pub fn ends_sentence(word: &str) -> bool {
    matches!(word.trim_end().chars().last(), Some('.' | '!' | '?'))
}
