//! services/advisor.rs
//! Second-opinion interface for casing verdicts, plus the merge policy
//! that combines the rule outcome with the advisor's.

use anyhow::Result;

use stylebook::casing::{CaseOutcome, CaseRule};

/// External reviewer consulted for advisor-eligible fields.
///
/// Implementations are expected to be synchronous; the reviewer calls
/// them inline and falls back to rule-only verdicts on error.
pub trait Advisor {
    /// Whether `text` already satisfies `rule`, with a correction if not.
    fn case_opinion(&self, rule: CaseRule, text: &str) -> Result<Opinion>;

    /// Tokens in `text` the advisor cannot map to common usage or the
    /// house lexicon. Empty means all clear.
    fn unknown_terms(&self, text: &str) -> Result<Vec<String>>;
}

/// Raw advisor answer for a single field.
#[derive(Debug, Clone)]
pub struct Opinion {
    pub valid: bool,
    pub corrected: String,
    pub explanation: String,
}

/// Rule outcome and advisor opinion folded into one recommendation.
#[derive(Debug, Clone)]
pub struct SecondOpinion {
    pub ai_valid: bool,
    pub ai_corrected: String,
    pub agreement: bool,
    pub final_valid: bool,
    pub final_recommendation: String,
    pub unknown_terms: Vec<String>,
}

/// Merge policy:
/// - both sides agree it fails: recommend the rule correction
/// - both sides agree it passes: keep the text
/// - sides disagree and the advisor says fail: recommend the advisor
///   correction
/// - sides disagree and the advisor says pass: keep the text
///
/// The advisor's pass/fail becomes the final verdict in every case.
pub fn merge_opinion(
    text: &str,
    rule: &CaseOutcome,
    ai: &Opinion,
    unknown_terms: Vec<String>,
) -> SecondOpinion {
    let agreement = rule.passed == ai.valid;

    let final_recommendation = if agreement && !rule.passed {
        rule.corrected.clone()
    } else if agreement {
        text.to_string()
    } else if !ai.valid {
        ai.corrected.clone()
    } else {
        text.to_string()
    };

    SecondOpinion {
        ai_valid: ai.valid,
        ai_corrected: ai.corrected.clone(),
        agreement,
        final_valid: ai.valid,
        final_recommendation,
        unknown_terms,
    }
}
