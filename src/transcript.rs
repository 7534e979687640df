use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::models::{ContextUsage, TranscriptLine};

/// Returns the last `message.usage` record in a JSONL transcript.
///
/// The file is streamed line by line. Blank and unparsable lines are skipped;
/// failing to open or read the file is an error.
pub fn last_usage(path: &Path) -> Result<Option<ContextUsage>> {
    let file = File::open(path).with_context(|| format!("open transcript {}", path.display()))?;
    last_usage_from_reader(BufReader::new(file))
        .with_context(|| format!("read transcript {}", path.display()))
}

/// Same scan as [`last_usage`] over an arbitrary reader.
///
/// Every `usage` value replaces whatever came before it: a trailing `null`
/// yields `None`, a trailing non-object yields an all-zero record.
pub fn last_usage_from_reader<R: BufRead>(reader: R) -> Result<Option<ContextUsage>> {
    let mut last: Option<ContextUsage> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let t = line.trim();
        if t.is_empty() {
            continue;
        }
        match serde_json::from_str::<TranscriptLine>(t) {
            Ok(parsed) => {
                if let Some(usage) = parsed.message.and_then(|m| m.usage) {
                    last = usage;
                }
            }
            Err(e) => {
                tracing::debug!(line = idx + 1, error = %e, "skipping malformed transcript line");
            }
        }
    }

    Ok(last)
}
