// src/jsonl.rs
use crate::core::engine::detect;
use serde::Deserialize;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// One input record, as read from the JSONL source.
#[derive(Debug, Deserialize)]
pub struct InputRecord {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum JsonlError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: malformed record: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
}

/// Classifies every record in `reader` and writes one JSON result per line
/// to `writer`, preserving input order. Blank lines are skipped. Returns the
/// number of records processed.
pub fn run<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<usize, JsonlError> {
    let mut processed = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: InputRecord = serde_json::from_str(line)
            .map_err(|source| JsonlError::Malformed { line: idx + 1, source })?;
        let result = detect(&record.id, &record.text);
        debug!(id = %result.id, language = ?result.primary_language, "classified record");
        let mut out = serde_json::to_string(&result).map_err(std::io::Error::from)?;
        out.push('\n');
        writer.write_all(out.as_bytes())?;
        processed += 1;
    }
    writer.flush()?;
    Ok(processed)
}
