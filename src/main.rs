// src/main.rs
use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

use file_type_report::cli::{Args, USAGE};
use file_type_report::{files, output, report};

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            // Too few arguments is not a failure, just show how to call us.
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };

    match run(&args) {
        Ok(()) => {
            println!("Report written to {}", args.report_file.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    log::debug!("scanning {}", args.folder.display());
    let rows = report::aggregate(files::enumerate_files(&args.folder))?;
    log::debug!("rendering {} rows", rows.len());
    output::render(&rows).save(&args.report_file)?;
    Ok(())
}
