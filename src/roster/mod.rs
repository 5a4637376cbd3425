//! Employee roster filter.
//!
//! Reads `EMP_NAME,EMP_ID,DEPT_ID,SAL` rows and keeps those in one
//! department earning at least a minimum salary. This is a stateless text
//! transform with no connection to the vehicle model.

pub mod error;

pub use error::RosterError;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub const HEADER: &str = "EMP_NAME,EMP_ID,DEPT_ID,SAL";

/// Which rows to keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub department: i64,
    pub min_salary: i64,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            department: 10,
            min_salary: 10_000,
        }
    }
}

impl Criteria {
    fn keeps(&self, department: i64, salary: i64) -> bool {
        department == self.department && salary >= self.min_salary
    }
}

/// Counts from one filter run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    /// Data rows read, excluding the header and blank lines.
    pub rows: u64,
    pub retained: u64,
    /// Rows skipped because a numeric field did not parse.
    pub malformed: u64,
}

#[derive(Debug, PartialEq, Eq)]
enum Row {
    Keep,
    Drop,
    Malformed,
}

fn classify(line: &str, criteria: &Criteria) -> Row {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Row::Drop;
    }
    match (
        fields[2].trim().parse::<i64>(),
        fields[3].trim().parse::<i64>(),
    ) {
        (Ok(department), Ok(salary)) if criteria.keeps(department, salary) => Row::Keep,
        (Ok(_), Ok(_)) => Row::Drop,
        _ => Row::Malformed,
    }
}

/// Filter rows from `reader` into `writer`.
///
/// The header is always written first, followed by the retained rows in
/// input order. An input line starting with `EMP_NAME` is treated as the
/// header and skipped.
pub fn filter_records<R, W>(
    reader: R,
    mut writer: W,
    criteria: &Criteria,
) -> Result<FilterSummary, RosterError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = FilterSummary::default();
    writeln!(writer, "{HEADER}").map_err(RosterError::Write)?;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(RosterError::Read)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("EMP_NAME") {
            continue;
        }
        summary.rows += 1;

        match classify(trimmed, criteria) {
            Row::Keep => {
                writeln!(writer, "{trimmed}").map_err(RosterError::Write)?;
                summary.retained += 1;
            }
            Row::Drop => {}
            Row::Malformed => {
                warn!(line = index + 1, row = trimmed, "skipping malformed row");
                summary.malformed += 1;
            }
        }
    }

    writer.flush().map_err(RosterError::Write)?;
    Ok(summary)
}

/// Filter the file at `input` into `output`, replacing any existing content.
pub fn filter_file(
    input: &Path,
    output: &Path,
    criteria: &Criteria,
) -> Result<FilterSummary, RosterError> {
    let source = File::open(input).map_err(|source| RosterError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    let sink = File::create(output).map_err(|source| RosterError::Create {
        path: output.to_path_buf(),
        source,
    })?;

    let summary = filter_records(BufReader::new(source), BufWriter::new(sink), criteria)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        rows = summary.rows,
        retained = summary.retained,
        malformed = summary.malformed,
        "roster filtered"
    );
    Ok(summary)
}
