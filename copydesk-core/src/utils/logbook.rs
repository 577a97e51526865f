//! utils/logbook.rs
//! JSONL run telemetry for brief reviews.
//!
//! - One aggregate stream (`logbook.jsonl`) for lifecycle events.
//! - One reviews stream (`logbook/reviews.jsonl`) with a record per run.
//! - Field text is never logged in full, only previews.

use chrono::Utc;
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::commands::init::ensure_initialized_once;
use crate::config::CoreConfig;

const PREVIEW_CHARS: usize = 120;

/// One line in the reviews stream per completed run.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRunRecord {
    pub run_id: String,
    pub ts: String,
    pub brief_preview: String,
    pub fields_checked: usize,
    pub failed: usize,
    pub advisor_used: bool,
}

/// Append a completed run to the reviews stream.
pub fn record_review_run(record: &ReviewRunRecord) {
    if !logbook_enabled() {
        return;
    }
    append_jsonl(&log_paths().reviews, record);
}

/// Append a lifecycle event to the aggregate stream.
pub fn record_event(event: &str, data: &Value) {
    if !logbook_enabled() {
        return;
    }
    let entry = json!({
        "timestamp": Utc::now().to_rfc3339(),
        "event": event,
        "data": data
    });
    append_jsonl(&log_paths().aggregate, &entry);
}

/// Single-line preview of a piece of copy for log records.
pub fn preview(s: &str) -> String {
    let mut t = s.replace('\n', " ");
    if t.chars().count() > PREVIEW_CHARS {
        t = t.chars().take(PREVIEW_CHARS).collect();
        t.push('…');
    }
    t
}

/// ----------- Helpers -----------

/// Append a single JSON value as a line to a JSONL file.
/// Creates parent directories if missing; ignores write errors to avoid
/// crashing the caller.
fn append_jsonl<P: AsRef<std::path::Path>, S: Serialize>(path: P, val: &S) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(mut f) = fs::OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(f, "{}", serde_json::to_string(val).unwrap());
    }
}

fn log_paths() -> &'static LogPaths {
    static CELL: OnceCell<LogPaths> = OnceCell::new();
    CELL.get_or_init(|| match ensure_initialized_once() {
        Ok(report) => LogPaths::from_config(&report.config),
        Err(_) => LogPaths::default(),
    })
}

fn logbook_enabled() -> bool {
    static CELL: OnceCell<bool> = OnceCell::new();
    *CELL.get_or_init(|| {
        ensure_initialized_once()
            .map(|report| report.config.logbook.enabled)
            .unwrap_or(true)
    })
}

#[derive(Clone)]
struct LogPaths {
    aggregate: PathBuf,
    reviews: PathBuf,
}

impl LogPaths {
    fn from_config(cfg: &CoreConfig) -> Self {
        Self {
            aggregate: cfg.logbook.aggregate.clone(),
            reviews: cfg.logbook.reviews_log.clone(),
        }
    }
}

impl Default for LogPaths {
    fn default() -> Self {
        let cfg = CoreConfig::default();
        Self::from_config(&cfg)
    }
}
