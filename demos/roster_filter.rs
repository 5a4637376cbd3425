//! Roster Filter
//!
//! Keeps department-10 employees earning at least 10000.
//!
//! Run with: cargo run --example roster_filter -- <input.csv> <output.csv>

use motorpool::roster::{filter_file, Criteria};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("usage: roster_filter <input.csv> <output.csv>");
        return ExitCode::FAILURE;
    };

    match filter_file(
        &PathBuf::from(input),
        &PathBuf::from(output),
        &Criteria::default(),
    ) {
        Ok(summary) => {
            println!(
                "Kept {} of {} rows ({} malformed)",
                summary.retained, summary.rows, summary.malformed
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
