// src/lib.rs
pub mod cli;
pub mod error;
pub mod files;
pub mod output;
pub mod report;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
