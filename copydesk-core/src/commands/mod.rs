// src/commands/mod.rs
pub mod init;
mod api;

pub use api::{Commands, ReviewRun};

pub use init::{ensure_initialized_once, InitReport};
