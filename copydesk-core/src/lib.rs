// src/lib.rs

// Public modules so the CLI can use them
pub mod commands;
pub mod config;
pub mod services;
pub mod utils;

// Public API
pub use commands::{ensure_initialized_once, Commands, InitReport, ReviewRun};
pub use config::CoreConfig;
pub use services::{Advisor, ContentBrief, FailedItem, FieldRole, Opinion, SummaryRow, Verdict};
