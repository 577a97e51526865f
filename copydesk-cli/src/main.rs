// src/main.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};

use copydesk_core::{ensure_initialized_once, Advisor, Commands, ReviewRun};

mod openai;
use openai::OpenAiAdvisor;

#[derive(Parser)]
#[command(name = "copydesk", about = "House-style casing checker for content briefs")]
struct Cli {
    /// Copydesk home directory (defaults to .copydesk, or COPYDESK_HOME)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Initialize the Copydesk home (config, lexicon, logbook)
    Init,
    /// Show the active style lexicon
    Lexicon {
        #[arg(long, help = "List every shorthand and its canonical form")]
        terms: bool,
    },
    /// Review a content brief JSON file against the house style
    Review {
        #[arg(long)]
        brief: PathBuf,
        #[arg(long, help = "Consult the OpenAI advisor for meta fields and nav tabs")]
        advisor: bool,
        #[arg(long, help = "Write the full run as JSON to this path")]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Must happen before the first init call resolves the home.
    if let Some(home) = &cli.home {
        std::env::set_var("COPYDESK_HOME", home);
    }
    match cli.cmd {
        Cmd::Init => init(),
        Cmd::Lexicon { terms } => lexicon(terms),
        Cmd::Review {
            brief,
            advisor,
            report,
        } => review(&brief, advisor, report.as_deref()),
    }
}

fn init() -> Result<()> {
    let report = ensure_initialized_once()?;
    println!("copydesk home: {}", report.root.display());
    for item in &report.created {
        println!("  created {item}");
    }
    for item in &report.existed {
        println!("  kept    {item}");
    }
    Ok(())
}

fn lexicon(show_terms: bool) -> Result<()> {
    let report = ensure_initialized_once()?;
    let cmds = Commands::new()?;
    let lex = cmds.lexicon();
    println!(
        "{} v{} (family prefix \"{}\")",
        lex.name, lex.version, lex.brand_prefix
    );
    if report.config.lexicon.path.exists() {
        println!("source: {}", report.config.lexicon.path.display());
    } else {
        println!("source: embedded default");
    }
    println!(
        "{} terms, {} prefix exception(s)",
        lex.terms.len(),
        lex.prefix_exceptions.len()
    );
    if show_terms {
        for (shorthand, canonical) in &lex.terms {
            println!("  {shorthand} -> {canonical}");
        }
    }
    Ok(())
}

fn review(brief_path: &Path, with_advisor: bool, report_path: Option<&Path>) -> Result<()> {
    let report = ensure_initialized_once()?;

    let advisor: Option<Box<dyn Advisor>> = if with_advisor {
        let lexicon = stylebook::load_or_embedded(&report.config.lexicon.path)?;
        Some(Box::new(OpenAiAdvisor::from_env(
            &report.config.advisor,
            &lexicon,
        )?))
    } else {
        None
    };

    let cmds = Commands::with_advisor(advisor)?;
    let brief = cmds.load_brief(brief_path)?;
    let run = cmds.review_brief(&brief)?;

    print_summary(&run);
    print_failed(&run);
    print_unknown_terms(&run);

    let out_path = report_path.map(Path::to_path_buf).unwrap_or_else(|| {
        report
            .root
            .join("reports")
            .join(format!("review-{}.json", Utc::now().format("%Y%m%dT%H%M%S")))
    });
    let json = serde_json::to_string_pretty(&run).context("serializing review run")?;
    fs::write(&out_path, json)
        .with_context(|| format!("writing report {}", out_path.display()))?;
    println!();
    println!("report written to {}", out_path.display());
    Ok(())
}

fn print_summary(run: &ReviewRun) {
    println!("run {} at {}", run.run_id, run.reviewed_at);
    println!();
    println!(
        "{:<24} {:>7} {:>6} {:>6}  {}",
        "Component", "Checked", "Pass", "Fail", "Status"
    );
    for row in &run.summary {
        println!(
            "{:<24} {:>7} {:>6} {:>6}  {}",
            row.component, row.checked, row.passed, row.failed, row.status
        );
    }
}

fn print_failed(run: &ReviewRun) {
    println!();
    if run.failed.is_empty() {
        println!("all checked fields pass the house style");
        return;
    }
    println!("{} field(s) need fixes:", run.failed.len());
    for item in &run.failed {
        println!();
        println!("[{}] {}", item.category, item.kind);
        println!("  current:     {}", item.current);
        println!("  fix:         {}", item.fix);
        println!("  recommended: {}", item.recommended);
        if item.ai_consulted {
            println!("  (advisor consulted)");
        }
    }
}

fn print_unknown_terms(run: &ReviewRun) {
    let terms = run.unknown_terms();
    if terms.is_empty() {
        return;
    }
    println!();
    println!("unknown terms flagged by the advisor:");
    for (field, list) in &terms {
        println!("  {field}: {}", list.join(", "));
    }
}
