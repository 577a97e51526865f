//! services/reviewer.rs
//! Walks a content brief in presentation order and produces one verdict
//! per reviewable field.
//!
//! Each field goes through the same pipeline: shorthand normalization,
//! the role's casing policy, an optional advisor consultation, then the
//! trimmed-equality pass override. Advisor failures downgrade the field
//! to a rule-only verdict; they never fail the review.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use stylebook::casing::{self, CaseRule};
use stylebook::shorthand::normalize_shorthands;
use stylebook::types::StyleLexicon;

use crate::services::advisor::{merge_opinion, Advisor, Opinion};
use crate::services::brief::{ContentBrief, HeaderLevel};
use crate::utils::logbook;

// ----------------- Roles -----------------

/// Where in the brief a piece of copy lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    MetaTitle,
    MetaDescription,
    H1,
    HeaderCaption,
    H2,
    H3,
    H4,
    FaqHeader,
    FaqQuestion,
    FaqAnswer,
    NavTab,
    CtaText,
}

impl FieldRole {
    /// Casing policy this role is held to.
    pub fn rule(&self) -> CaseRule {
        match self {
            FieldRole::MetaTitle | FieldRole::NavTab => CaseRule::Title,
            FieldRole::H1 | FieldRole::H2 | FieldRole::FaqHeader => CaseRule::Capital,
            FieldRole::MetaDescription
            | FieldRole::HeaderCaption
            | FieldRole::H3
            | FieldRole::H4
            | FieldRole::FaqQuestion
            | FieldRole::FaqAnswer
            | FieldRole::CtaText => CaseRule::Sentence,
        }
    }

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            FieldRole::MetaTitle => "Meta Title",
            FieldRole::MetaDescription => "Meta Description",
            FieldRole::H1 => "H1",
            FieldRole::HeaderCaption => "Header Caption",
            FieldRole::H2 => "H2",
            FieldRole::H3 => "H3",
            FieldRole::H4 => "H4",
            FieldRole::FaqHeader => "FAQ H2 Header",
            FieldRole::FaqQuestion => "FAQ Question",
            FieldRole::FaqAnswer => "FAQ Answer",
            FieldRole::NavTab => "Product Nav Tab",
            FieldRole::CtaText => "CTA Text",
        }
    }

    /// Report section this role belongs to.
    pub fn category(&self) -> &'static str {
        match self {
            FieldRole::MetaTitle
            | FieldRole::MetaDescription
            | FieldRole::H1
            | FieldRole::HeaderCaption => "Metadata",
            FieldRole::H2 | FieldRole::H3 | FieldRole::H4 => "Headers",
            FieldRole::FaqHeader | FieldRole::FaqQuestion | FieldRole::FaqAnswer => "FAQs",
            FieldRole::NavTab => "Product Navigation",
            FieldRole::CtaText => "CTA",
        }
    }

    /// Meta title, meta description, and nav tabs consult the advisor;
    /// every other role stays rule-only.
    pub fn advisor_eligible(&self) -> bool {
        matches!(
            self,
            FieldRole::MetaTitle | FieldRole::MetaDescription | FieldRole::NavTab
        )
    }
}

// ----------------- Verdicts -----------------

/// One reviewed field.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub role: FieldRole,
    pub rule_name: &'static str,
    /// Field text after shorthand normalization; reports show this as
    /// the current copy.
    pub original_text: String,
    pub passed: bool,
    pub corrected_text: String,
    pub category: &'static str,
    pub ai_consulted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_opinion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_terms: Option<Vec<String>>,
}

// ----------------- Core -----------------

/// Review every recognized field of the brief, in presentation order.
pub fn review(
    brief: &ContentBrief,
    lexicon: &StyleLexicon,
    advisor: Option<&dyn Advisor>,
) -> Vec<Verdict> {
    let mut verdicts = Vec::new();

    check(&mut verdicts, FieldRole::MetaTitle, &brief.meta_title, lexicon, advisor);
    check(&mut verdicts, FieldRole::MetaDescription, &brief.meta_description, lexicon, advisor);
    check(&mut verdicts, FieldRole::H1, &brief.h1, lexicon, advisor);
    check(&mut verdicts, FieldRole::HeaderCaption, &brief.header_caption, lexicon, advisor);

    for header in &brief.headers {
        match header.level {
            HeaderLevel::H2 => check(&mut verdicts, FieldRole::H2, &header.text, lexicon, advisor),
            HeaderLevel::H3 => check(&mut verdicts, FieldRole::H3, &header.text, lexicon, advisor),
            HeaderLevel::H4 => check(&mut verdicts, FieldRole::H4, &header.text, lexicon, advisor),
            HeaderLevel::Other => {}
        }
    }

    if !brief.faqs.header.is_empty() {
        check(&mut verdicts, FieldRole::FaqHeader, &brief.faqs.header, lexicon, advisor);
    }
    for faq in &brief.faqs.questions {
        check(&mut verdicts, FieldRole::FaqQuestion, &faq.question, lexicon, advisor);
        check(&mut verdicts, FieldRole::FaqAnswer, &faq.answer, lexicon, advisor);
    }

    for tab in &brief.product_nav.tabs {
        check(&mut verdicts, FieldRole::NavTab, &tab.text, lexicon, advisor);
    }

    if !brief.cta.text.is_empty() {
        check(&mut verdicts, FieldRole::CtaText, &brief.cta.text, lexicon, advisor);
    }

    verdicts
}

fn check(
    out: &mut Vec<Verdict>,
    role: FieldRole,
    text: &str,
    lexicon: &StyleLexicon,
    advisor: Option<&dyn Advisor>,
) {
    let rule = role.rule();
    let normalized = normalize_shorthands(text, lexicon);
    let outcome = casing::apply(rule, &normalized, lexicon);

    if let Some(advisor) = advisor.filter(|_| role.advisor_eligible()) {
        match consult(advisor, rule, &normalized) {
            Ok((opinion, unknown_terms)) => {
                let merged = merge_opinion(&normalized, &outcome, &opinion, unknown_terms);
                let passed = merged.final_valid
                    || passes_by_equality(&normalized, &merged.final_recommendation);
                out.push(Verdict {
                    role,
                    rule_name: rule.as_str(),
                    original_text: normalized,
                    passed,
                    corrected_text: merged.final_recommendation,
                    category: role.category(),
                    ai_consulted: true,
                    ai_opinion: Some(merged.ai_corrected),
                    unknown_terms: if merged.unknown_terms.is_empty() {
                        None
                    } else {
                        Some(merged.unknown_terms)
                    },
                });
                return;
            }
            Err(err) => {
                logbook::record_event(
                    "advisor_fallback",
                    &json!({ "role": role.label(), "error": err.to_string() }),
                );
            }
        }
    }

    let passed = outcome.passed || passes_by_equality(&normalized, &outcome.corrected);
    out.push(Verdict {
        role,
        rule_name: rule.as_str(),
        original_text: normalized,
        passed,
        corrected_text: outcome.corrected,
        category: role.category(),
        ai_consulted: false,
        ai_opinion: None,
        unknown_terms: None,
    });
}

fn consult(advisor: &dyn Advisor, rule: CaseRule, text: &str) -> Result<(Opinion, Vec<String>)> {
    let opinion = advisor.case_opinion(rule, text)?;
    // A failed terms scan degrades to "no unknown terms", not an error.
    let unknown_terms = advisor.unknown_terms(text).unwrap_or_default();
    Ok((opinion, unknown_terms))
}

// ----------------- Helpers -----------------

// Trimmed equality, ignoring decorative quotes around the recommendation.
fn passes_by_equality(text: &str, corrected: &str) -> bool {
    let recommended = corrected.trim().trim_matches('"').trim_matches('\'');
    text.trim() == recommended
}
