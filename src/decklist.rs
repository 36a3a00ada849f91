//! Decklist text parsing

use crate::error::{DeckError, DeckResult};
use crate::models::DecklistEntry;
use std::path::Path;

/// Largest copy count accepted on a single decklist line
pub const MAX_COPY_COUNT: u32 = 1000;

fn parse_error(line: usize, content: &str, reason: impl Into<String>) -> DeckError {
    DeckError::Parse {
        line,
        content: content.to_string(),
        reason: reason.into(),
    }
}

/// Parse one `<count> <name>` line. The split happens at the first space only,
/// so card names may contain spaces.
pub fn parse_line(line_no: usize, line: &str) -> DeckResult<DecklistEntry> {
    let trimmed = line.trim();
    let (count, name) = trimmed
        .split_once(' ')
        .ok_or_else(|| parse_error(line_no, trimmed, "expected `<count> <name>`"))?;

    let count: u32 = count
        .parse()
        .map_err(|_| parse_error(line_no, trimmed, format!("invalid count `{count}`")))?;
    if count == 0 {
        return Err(parse_error(line_no, trimmed, "count must be positive"));
    }
    if count > MAX_COPY_COUNT {
        return Err(parse_error(line_no, trimmed, "count too large"));
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(parse_error(line_no, trimmed, "missing card name"));
    }

    Ok(DecklistEntry {
        count,
        name: name.to_string(),
        line: line_no,
    })
}

/// Parse decklist lines, skipping blank ones. The first malformed line aborts.
pub fn parse_lines<I, S>(lines: I) -> DeckResult<Vec<DecklistEntry>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        entries.push(parse_line(idx + 1, line)?);
    }
    Ok(entries)
}

/// Parse a whole decklist text
pub fn parse_decklist(text: &str) -> DeckResult<Vec<DecklistEntry>> {
    parse_lines(text.lines())
}

/// Read and parse a decklist file
pub fn read_decklist<P: AsRef<Path>>(path: P) -> DeckResult<Vec<DecklistEntry>> {
    let path = path.as_ref();
    log::info!("Reading decklist from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let entries = parse_decklist(&text)?;
    log::info!(
        "Parsed {} decklist entries ({} cards)",
        entries.len(),
        total_count(&entries)
    );
    Ok(entries)
}

/// Sum of all declared copy counts
pub fn total_count(entries: &[DecklistEntry]) -> usize {
    entries.iter().map(|e| e.count as usize).sum()
}

#[cfg(test)]
#[path = "decklist_tests.rs"]
mod tests;
