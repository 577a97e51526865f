//! services/summary.rs
//! Rolls verdicts up into the component summary table and the
//! failed-items table shown in reports.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::services::brief::{ContentBrief, HeaderLevel};
use crate::services::redline;
use crate::services::reviewer::{FieldRole, Verdict};

// ----------------- Summary table -----------------

/// One row of the component summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub component: &'static str,
    /// False when the brief carries no such component at all.
    pub recognized: bool,
    pub checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub status: &'static str,
}

impl SummaryRow {
    fn new(component: &'static str, recognized: bool, checked: usize) -> Self {
        SummaryRow {
            component,
            recognized,
            checked,
            passed: 0,
            failed: 0,
            status: "N/A",
        }
    }
}

/// Build the fixed twelve-row summary for a reviewed brief.
pub fn build_summary(brief: &ContentBrief, verdicts: &[Verdict]) -> Vec<SummaryRow> {
    let cta_present = !brief.cta.text.is_empty();
    let mut rows = vec![
        SummaryRow::new("Meta Title", true, 1),
        SummaryRow::new("Meta Description", true, 1),
        SummaryRow::new("H1", true, 1),
        SummaryRow::new("Header Caption", true, 1),
        SummaryRow::new("H2 Headers", true, brief.header_count(HeaderLevel::H2)),
        SummaryRow::new("H3 Headers", true, brief.header_count(HeaderLevel::H3)),
        SummaryRow::new("H4 Headers", true, brief.header_count(HeaderLevel::H4)),
        SummaryRow::new("FAQ H2 Header", true, 1),
        SummaryRow::new("FAQ Questions", true, brief.faqs.questions.len()),
        SummaryRow::new("FAQ Answers", true, brief.faqs.questions.len()),
        SummaryRow::new("Product Navigation Tabs", true, brief.product_nav.tabs.len()),
        SummaryRow::new("CTA Section", cta_present, usize::from(cta_present)),
    ];

    for verdict in verdicts {
        let row = &mut rows[row_index(verdict.role)];
        if verdict.passed {
            row.passed += 1;
        } else {
            row.failed += 1;
        }
    }

    for row in &mut rows {
        row.status = if !row.recognized {
            "N/A"
        } else if row.failed == 0 {
            "PASS"
        } else {
            "FAIL"
        };
    }

    rows
}

fn row_index(role: FieldRole) -> usize {
    match role {
        FieldRole::MetaTitle => 0,
        FieldRole::MetaDescription => 1,
        FieldRole::H1 => 2,
        FieldRole::HeaderCaption => 3,
        FieldRole::H2 => 4,
        FieldRole::H3 => 5,
        FieldRole::H4 => 6,
        FieldRole::FaqHeader => 7,
        FieldRole::FaqQuestion => 8,
        FieldRole::FaqAnswer => 9,
        FieldRole::NavTab => 10,
        FieldRole::CtaText => 11,
    }
}

// ----------------- Failed items -----------------

/// One row of the failed-items table.
#[derive(Debug, Clone, Serialize)]
pub struct FailedItem {
    pub category: &'static str,
    pub kind: &'static str,
    pub current: String,
    pub fix: String,
    pub recommended: String,
    pub ai_consulted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_terms: Option<Vec<String>>,
}

/// Collect failing verdicts into table rows, dropping entries with
/// nothing actionable to show.
pub fn build_failed_items(verdicts: &[Verdict]) -> Vec<FailedItem> {
    let mut items = Vec::new();
    for verdict in verdicts {
        if verdict.passed {
            continue;
        }
        let current = verdict.original_text.trim();
        let recommended = verdict
            .corrected_text
            .trim()
            .trim_matches('"')
            .trim_matches('\'');
        if current.is_empty() || recommended.is_empty() {
            continue;
        }
        if current == recommended {
            continue;
        }
        let fix = redline::render_fix(&verdict.original_text, recommended);
        if fix == "No change needed" || fix == "No changes detected" {
            continue;
        }
        items.push(FailedItem {
            category: derive_category(verdict.role.label()),
            kind: verdict.role.label(),
            current: verdict.original_text.clone(),
            fix,
            recommended: recommended.to_string(),
            ai_consulted: verdict.ai_consulted,
            unknown_terms: verdict.unknown_terms.clone(),
        });
    }
    items
}

// Label keywords decide the table section. Order matters: "FAQ H2
// Header" and "Header Caption" both land under Headers.
fn derive_category(label: &str) -> &'static str {
    if label.contains("Meta") {
        return "Metadata";
    }
    if ["H1", "H2", "H3", "H4", "Header"].iter().any(|k| label.contains(k)) {
        return "Headers";
    }
    if label.contains("FAQ") {
        return "FAQ";
    }
    if label.contains("CTA") {
        return "CTA";
    }
    if ["Product", "Nav", "Tab"].iter().any(|k| label.contains(k)) {
        return "Navigation";
    }
    "Content"
}

// ----------------- Unknown terms -----------------

/// Gather advisor-flagged terms keyed by field label.
pub fn collect_unknown_terms(verdicts: &[Verdict]) -> BTreeMap<String, Vec<String>> {
    let mut by_field = BTreeMap::new();
    for verdict in verdicts {
        if let Some(terms) = &verdict.unknown_terms {
            if !terms.is_empty() {
                by_field.insert(verdict.role.label().to_string(), terms.clone());
            }
        }
    }
    by_field
}
