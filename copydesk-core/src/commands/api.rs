// src/commands/api.rs
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use stylebook::types::StyleLexicon;

use crate::commands::init::ensure_initialized_once;
use crate::services::advisor::Advisor;
use crate::services::brief::ContentBrief;
use crate::services::reviewer::{self, Verdict};
use crate::services::summary::{self, FailedItem, SummaryRow};
use crate::utils::logbook::{self, ReviewRunRecord};

pub struct Commands {
    lexicon: StyleLexicon,                // loaded once per instance
    advisor: Option<Box<dyn Advisor>>,    // None = rule-only review
}

/// Everything one review produced, ready for rendering or export.
#[derive(Debug, Serialize)]
pub struct ReviewRun {
    pub run_id: String,
    pub reviewed_at: String,
    pub verdicts: Vec<Verdict>,
    pub failed: Vec<FailedItem>,
    pub summary: Vec<SummaryRow>,
}

impl ReviewRun {
    /// Advisor-flagged terms keyed by field label.
    pub fn unknown_terms(&self) -> BTreeMap<String, Vec<String>> {
        summary::collect_unknown_terms(&self.verdicts)
    }
}

impl Commands {
    /// Rule-only reviewer over the workspace lexicon.
    pub fn new() -> Result<Self> {
        Self::with_advisor(None)
    }

    /// Reviewer with a second-opinion advisor attached.
    pub fn with_advisor(advisor: Option<Box<dyn Advisor>>) -> Result<Self> {
        let report = ensure_initialized_once()?;
        let lexicon = stylebook::load_or_embedded(&report.config.lexicon.path)
            .context("loading style lexicon")?;
        Ok(Self { lexicon, advisor })
    }

    pub fn lexicon(&self) -> &StyleLexicon {
        &self.lexicon
    }

    /// Parse a content brief from a JSON file.
    pub fn load_brief(&self, path: &Path) -> Result<ContentBrief> {
        ContentBrief::from_file(path)
    }

    /// Review every recognized field of the brief and roll the verdicts
    /// up into the failed-items and summary tables.
    pub fn review_brief(&self, brief: &ContentBrief) -> Result<ReviewRun> {
        let run_id = Uuid::new_v4().to_string();
        let reviewed_at = Utc::now().to_rfc3339();

        logbook::record_event(
            "review_started",
            &json!({"run_id": run_id, "advisor": self.advisor.is_some()}),
        );

        let verdicts = reviewer::review(brief, &self.lexicon, self.advisor.as_deref());
        let failed = summary::build_failed_items(&verdicts);
        let rows = summary::build_summary(brief, &verdicts);

        logbook::record_review_run(&ReviewRunRecord {
            run_id: run_id.clone(),
            ts: reviewed_at.clone(),
            brief_preview: logbook::preview(&brief.meta_title),
            fields_checked: verdicts.len(),
            failed: failed.len(),
            advisor_used: verdicts.iter().any(|v| v.ai_consulted),
        });

        Ok(ReviewRun {
            run_id,
            reviewed_at,
            verdicts,
            failed,
            summary: rows,
        })
    }
}
