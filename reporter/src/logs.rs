//! Extraction of the benchmark result line from a run's log archive.
//!
//! A run's logs arrive as a ZIP archive with one text file per job step. The
//! benchmark result is the last line printed by the `Build Chain` step, so
//! the archive is scanned for the first member whose path contains that
//! marker and only its final non-empty line is kept.

use std::io::{Cursor, Read};
use thiserror::Error;

const BUILD_CHAIN_MARKER: &str = "Build Chain";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to open log archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Failed to read log entry '{name}': {source}")]
    Entry {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Return the last non-empty line of the first `Build Chain` log in the
/// archive, or `None` when the archive has no such log. Callers treat `None`
/// as "metric unavailable", not as a failure.
pub fn last_build_chain_line(bytes: &[u8]) -> Result<Option<String>, LogError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !entry.name().contains(BUILD_CHAIN_MARKER) {
            continue;
        }

        let name = entry.name().to_string();
        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .map_err(|source| LogError::Entry { name, source })?;

        return Ok(content
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .map(|line| line.to_string()));
    }

    Ok(None)
}
