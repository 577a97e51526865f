//! The three casing policies and the trailing acronym-plural repair.
//!
//! All transformers are pure functions over (text, lexicon). Inside each
//! policy the word precedence is fixed: product-family names first, lexicon
//! shorthands second (where the policy consults them), structural exceptions
//! next, then the generic rewrite for that policy. The repair pass always
//! runs last, on the joined string.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::normalize::{clean_core, ends_sentence, is_all_upper, split_edges};
use crate::types::StyleLexicon;

// ----------------- Rules -----------------

/// Which casing policy a piece of copy is held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseRule {
    Capital,
    Title,
    Sentence,
}

impl CaseRule {
    /// Display name used in verdicts and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseRule::Capital => "Capital Case",
            CaseRule::Title => "Title Case",
            CaseRule::Sentence => "Sentence case",
        }
    }
}

// ----------------- Result -----------------

#[derive(Debug, Clone)]
pub struct CaseOutcome {
    /// True when the input already satisfied the policy verbatim.
    pub passed: bool,
    pub corrected: String,
}

/// Run one policy over a piece of text.
pub fn apply(rule: CaseRule, text: &str, lexicon: &StyleLexicon) -> CaseOutcome {
    match rule {
        CaseRule::Capital => capital_case(text, lexicon),
        CaseRule::Title => title_case(text, lexicon),
        CaseRule::Sentence => sentence_case(text, lexicon),
    }
}

// ----------------- Capital Case -----------------

/// Capital Case: every word gets first-letter-upper, rest-lower.
///
/// Exceptions, in order: family names kept verbatim, all-caps words longer
/// than one character kept, "faqs" forced to FAQs, "vs" forced to Vs.
/// The lexicon terms table is deliberately not consulted here; shorthand
/// normalization is expected to have run first.
pub fn capital_case(text: &str, lexicon: &StyleLexicon) -> CaseOutcome {
    if text.is_empty() {
        return CaseOutcome { passed: true, corrected: String::new() };
    }

    let mut corrected_words: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        let core = clean_core(word);
        if lexicon.is_brand_token(&core) {
            corrected_words.push(word.to_string());
        } else if is_all_upper(word) && word.chars().count() > 1 {
            corrected_words.push(word.to_string());
        } else if word.eq_ignore_ascii_case("faqs") {
            corrected_words.push("FAQs".to_string());
        } else if word.eq_ignore_ascii_case("vs") {
            corrected_words.push("Vs".to_string());
        } else {
            corrected_words.push(capitalize_word(word));
        }
    }

    finish(text, corrected_words)
}

// ----------------- Title Case -----------------

// Function words forced lowercase between the first and last word.
const TITLE_LOWERCASE: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "nor", "in", "of", "to", "for", "at", "by", "on",
    "with", "from", "into",
];

// One optional opening bracket, a word core, then closing/link punctuation.
static TITLE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([(\[]?)([\w\-]+)([)\]?,]*)$").unwrap());

/// Title Case: significant words capitalized, function words lowered
/// mid-title, lexicon shorthands rewritten to canonical form.
pub fn title_case(text: &str, lexicon: &StyleLexicon) -> CaseOutcome {
    if text.is_empty() {
        return CaseOutcome { passed: true, corrected: String::new() };
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    let mut corrected_words: Vec<String> = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let boundary = i == 0 || i == last;

        // Family names and known shorthands resolve before any casing.
        if let Some(caps) = TITLE_TOKEN.captures(word) {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            let core = caps.get(2).map_or("", |m| m.as_str());
            let suffix = caps.get(3).map_or("", |m| m.as_str());
            if lexicon.is_brand_token(core) {
                corrected_words.push((*word).to_string());
                continue;
            }
            if let Some(canonical) = lexicon.lookup(core) {
                corrected_words.push(format!("{prefix}{canonical}{suffix}"));
                continue;
            }
        }

        if is_all_upper(word) && word.chars().count() > 1 {
            corrected_words.push((*word).to_string());
        } else if word.eq_ignore_ascii_case("faqs") {
            corrected_words.push("FAQs".to_string());
        } else if word.eq_ignore_ascii_case("vs") {
            corrected_words.push(if boundary { "Vs" } else { "vs" }.to_string());
        } else {
            let stripped: String = word
                .to_lowercase()
                .chars()
                .filter(|c| !matches!(c, '.' | '!' | '?' | ';' | ':'))
                .collect();
            if !boundary && TITLE_LOWERCASE.contains(&stripped.as_str()) {
                // The stripped form is what gets emitted, dropping any
                // sentence punctuation the function word carried.
                corrected_words.push(stripped);
            } else {
                corrected_words.push(capitalize_word(word));
            }
        }
    }

    finish(text, corrected_words)
}

// ----------------- Sentence case -----------------

/// Sentence case: first word of each sentence capitalized, everything else
/// lowered except family names, lexicon shorthands, and all-caps words.
///
/// The start-of-sentence flag re-arms after any word ending '.', '!' or
/// '?', regardless of which branch handled it.
pub fn sentence_case(text: &str, lexicon: &StyleLexicon) -> CaseOutcome {
    if text.is_empty() {
        return CaseOutcome { passed: true, corrected: String::new() };
    }

    let mut corrected_words: Vec<String> = Vec::new();
    let mut sentence_start = true;

    for word in text.split_whitespace() {
        let core = clean_core(word);

        let corrected = if lexicon.is_brand_token(&core) {
            word.to_string()
        } else if let Some(canonical) = lexicon.lookup(&core) {
            match split_edges(word) {
                Some((prefix, _, suffix)) => format!("{prefix}{canonical}{suffix}"),
                None => canonical.to_string(),
            }
        } else if is_all_upper(&core) && core.chars().count() > 1 {
            word.to_string()
        } else if sentence_start {
            uppercase_first_if_lower(word)
        } else if core.chars().any(|c| c.is_uppercase()) {
            // Lower only the core slice; edge punctuation stays put.
            match split_edges(word) {
                Some((prefix, mid, suffix)) => {
                    format!("{prefix}{}{suffix}", mid.to_lowercase())
                }
                None => word.to_string(),
            }
        } else {
            word.to_string()
        };

        corrected_words.push(corrected);
        sentence_start = ends_sentence(word);
    }

    finish(text, corrected_words)
}

// ----------------- Repair -----------------

static PLURAL_ACRONYMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(Vpns|Apis|Urls|Sdks|Vms|Ips|Ids|Faqs|Pdfs|Csvs|Slas|Kpis)\b").unwrap()
});

/// Undo the capitalization the generic rewrites apply to plural acronyms
/// (Vpns -> VPNs and friends).
pub fn repair_acronym_plurals(text: &str) -> String {
    PLURAL_ACRONYMS
        .replace_all(text, |caps: &Captures<'_>| {
            match &caps[1] {
                "Vpns" => "VPNs",
                "Apis" => "APIs",
                "Urls" => "URLs",
                "Sdks" => "SDKs",
                "Vms" => "VMs",
                "Ips" => "IPs",
                "Ids" => "IDs",
                "Faqs" => "FAQs",
                "Pdfs" => "PDFs",
                "Csvs" => "CSVs",
                "Slas" => "SLAs",
                "Kpis" => "KPIs",
                other => other,
            }
            .to_string()
        })
        .into_owned()
}

// ----------------- Helpers -----------------

fn finish(text: &str, words: Vec<String>) -> CaseOutcome {
    let corrected = repair_acronym_plurals(&words.join(" "));
    CaseOutcome { passed: text == corrected, corrected }
}

// First char upper, the rest lower; single-char words go fully upper.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if word.chars().count() > 1 => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        Some(_) => word.to_uppercase(),
        None => String::new(),
    }
}

// Uppercase the first char only when it is lowercase; leave the rest alone.
fn uppercase_first_if_lower(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
        _ => word.to_string(),
    }
}
