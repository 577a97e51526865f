// copydesk-core/src/commands/init.rs

use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::CoreConfig;

#[derive(Debug, Clone)]
pub struct InitReport {
    pub root: PathBuf,
    pub config: CoreConfig,
    pub created: Vec<String>,
    pub existed: Vec<String>,
}

// ---------- single global init gate ----------

static INIT: OnceCell<InitReport> = OnceCell::new();

/// Idempotent global initializer. Safe to call often.
/// Returns a &'static InitReport once initialization has completed.
pub fn ensure_initialized_once() -> Result<&'static InitReport> {
    INIT.get_or_try_init(ensure_initialized)
}

/// Resolve the Copydesk home. Allow override via COPYDESK_HOME (tests/CI).
fn copydesk_home() -> PathBuf {
    std::env::var_os("COPYDESK_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".copydesk"))
}

/// Public API: ensure the home layout exists (idempotent). Safe to call often.
pub fn ensure_initialized() -> Result<InitReport> {
    let root = copydesk_home();
    let mut created = Vec::new();
    let mut existed = Vec::new();

    // Directories
    ensure_dir(&root, "", &mut created, &mut existed)?;
    ensure_dir(&root, "lexicon", &mut created, &mut existed)?;
    ensure_dir(&root, "reports", &mut created, &mut existed)?;

    // Config
    ensure_file(
        &root,
        "config.toml",
        Some(DEFAULT_CONFIG_TOML),
        &mut created,
        &mut existed,
    )?;

    // House lexicon (seed only when missing)
    let seeded = stylebook::write_default_lexicon(root.join("lexicon"))?;
    if seeded.is_empty() {
        existed.push("lexicon/lexicon.toml".to_string());
    } else {
        for name in seeded {
            created.push(format!("lexicon/{name}"));
        }
    }

    // Logbook schema (per-stream JSONL files)
    initialize_logbook_files(&root, &mut created, &mut existed)?;

    let config = CoreConfig::load(&root)?;

    Ok(InitReport {
        root,
        config,
        created,
        existed,
    })
}

fn ensure_dir(
    base: &Path,
    rel: &str,
    created: &mut Vec<String>,
    existed: &mut Vec<String>,
) -> Result<()> {
    let p = if rel.is_empty() { base.to_path_buf() } else { base.join(rel) };
    if p.exists() {
        existed.push(if rel.is_empty() { ".".to_string() } else { rel.to_string() });
        return Ok(());
    }
    fs::create_dir_all(&p).with_context(|| format!("create_dir_all({:?})", p))?;
    created.push(if rel.is_empty() { ".".to_string() } else { rel.to_string() });
    Ok(())
}

fn ensure_file(
    base: &Path,
    rel_file: &str,
    content_if_absent: Option<&str>,
    created: &mut Vec<String>,
    existed: &mut Vec<String>,
) -> Result<()> {
    let p = base.join(rel_file);
    if p.exists() {
        existed.push(rel_file.to_string());
        return Ok(());
    }
    if let Some(text) = content_if_absent {
        write_atomic(&p, text.as_bytes())?;
    } else {
        write_atomic(&p, b"")?;
    }
    created.push(rel_file.to_string());
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create_dir_all({:?})", parent))?;
    }
    let tmp = path.with_extension("tmp");
    {
        let mut f = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&tmp)
            .with_context(|| format!("open temp file {:?}", tmp))?;
        f.write_all(bytes)?;
        f.flush()?;
    }
    fs::rename(&tmp, path).with_context(|| format!("rename {:?} -> {:?}", tmp, path))?;
    Ok(())
}

fn ensure_seeded_jsonl(
    dir: &Path,
    file: &str,
    init_line: &str,
    created: &mut Vec<String>,
    existed: &mut Vec<String>,
) -> Result<()> {
    let p = dir.join(file);
    if !p.exists() {
        ensure_file(dir, file, Some(&(init_line.to_string() + "\n")), created, existed)?;
        return Ok(());
    }
    existed.push(file.to_string());
    // If exists but empty, seed it
    if fs::metadata(&p)?.len() == 0 {
        let mut f = OpenOptions::new().append(true).open(&p)?;
        f.write_all(init_line.as_bytes())?;
        f.write_all(b"\n")?;
    }
    Ok(())
}

fn initialize_logbook_files(
    root: &Path,
    created: &mut Vec<String>,
    existed: &mut Vec<String>,
) -> Result<()> {
    let ts = Utc::now().to_rfc3339();
    let init_event = format!(
        r#"{{"ts":"{}","event":"system_init","agent":"system","data":{{"version":"0.1.0"}}}}"#,
        ts
    );

    // aggregate
    ensure_seeded_jsonl(root, "logbook.jsonl", &init_event, created, existed)?;

    // per-stream
    let log_dir = root.join("logbook");
    ensure_dir(root, "logbook", created, existed)?;
    ensure_seeded_jsonl(&log_dir, "reviews.jsonl", &init_event, created, existed)?;
    Ok(())
}

// ---------- defaults ----------

const DEFAULT_CONFIG_TOML: &str = r#"[system]
name = "copydesk"
version = "0.1.0"

[lexicon]
path = "lexicon/lexicon.toml"

[advisor]
enabled = false
model = "gpt-4o-mini"
endpoint = "https://api.openai.com/v1/chat/completions"
timeout_secs = 30

[logbook]
enabled = true
path = "logbook"
aggregate = "logbook.jsonl"
reviews_log = "logbook/reviews.jsonl"
"#;
