// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments: two positional paths, nothing else.
#[derive(Parser, Debug)]
#[command(
    name = "file_type_report",
    version = crate::VERSION,
    about = "Recursively scans a folder and writes an HTML report of file counts and total sizes per extension"
)]
pub struct Args {
    /// Folder to scan recursively
    pub folder: PathBuf,

    /// Path of the HTML report file to write
    pub report_file: PathBuf,
}

/// Usage line printed when the positional arguments are missing.
pub const USAGE: &str = "Usage: file_type_report <folder> <report file>";
