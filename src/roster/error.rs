//! Roster filter errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a filter run.
///
/// Malformed rows are not errors; they are skipped and counted.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
}
