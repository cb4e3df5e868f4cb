//! Reading the learner's completion state file.

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Suffix stripped from each recorded identifier.
pub const STATE_SUFFIX: &str = ".rs";

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_\-.]+)").expect("valid slug regex"));

/// Reads the set of completed exercise identifiers.
///
/// A missing file means nothing has been completed yet. Invalid UTF-8 bytes
/// are dropped, so the text around them joins up.
pub async fn read_completed_slugs(path: &Path) -> Result<HashSet<String>> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No state file at {}", path.display());
            return Ok(HashSet::new());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read state file: {}", path.display()));
        }
    };

    let text: String = bytes.utf8_chunks().map(|c| c.valid()).collect();
    let done = parse_completed_slugs(&text);
    debug!("Read {} completed identifiers from {}", done.len(), path.display());
    Ok(done)
}

/// Extracts one identifier from the leading token of each non-blank line.
///
/// Lines break on `\n`, `\r` and the other Unicode line separators.
pub fn parse_completed_slugs(text: &str) -> HashSet<String> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| SLUG_RE.captures(line))
        .map(|caps| {
            let token = &caps[1];
            token.strip_suffix(STATE_SUFFIX).unwrap_or(token).to_string()
        })
        .collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_suffix_and_trailing_text() {
        let done = parse_completed_slugs("variables1.rs\nmove_semantics2 (extra text)\n");
        assert_eq!(done.len(), 2);
        assert!(done.contains("variables1"));
        assert!(done.contains("move_semantics2"));
    }

    #[test]
    fn test_parse_skips_blank_and_malformed_lines() {
        let done = parse_completed_slugs("\n   \n# comment\n  *starred\nif1\n");
        assert_eq!(done.len(), 1);
        assert!(done.contains("if1"));
    }

    #[test]
    fn test_parse_trims_leading_whitespace() {
        let done = parse_completed_slugs("   \tstructs3.rs   \r\n");
        assert!(done.contains("structs3"));
    }

    #[test]
    fn test_parse_splits_on_carriage_returns() {
        let done = parse_completed_slugs("if1\rif2\r");
        assert_eq!(done.len(), 2);
        assert!(done.contains("if1"));
        assert!(done.contains("if2"));
    }

    #[test]
    fn test_parse_splits_on_unicode_separators() {
        let done = parse_completed_slugs("a1\u{2028}b1\u{85}c1\x0cd1");
        assert_eq!(done.len(), 4);
        assert!(done.contains("d1"));
    }

    #[test]
    fn test_parse_collapses_duplicates() {
        let done = parse_completed_slugs("hashmaps1\nhashmaps1.rs\nhashmaps1 again\n");
        assert_eq!(done.len(), 1);
    }

    #[test]
    fn test_parse_only_strips_one_suffix() {
        let done = parse_completed_slugs("weird.rs.rs\n");
        assert!(done.contains("weird.rs"));
    }

    #[tokio::test]
    async fn test_missing_state_file_is_empty() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let done = read_completed_slugs(&dir.path().join("nope.txt")).await?;
        assert!(done.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_utf8_bytes_are_dropped() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("state.txt");
        std::fs::write(&path, b"intro1\n\xff\xfebroken\nintro\xff2.rs\n")?;

        let done = read_completed_slugs(&path).await?;
        assert_eq!(done.len(), 3);
        assert!(done.contains("intro1"));
        assert!(done.contains("broken"));
        assert!(done.contains("intro2"));
        Ok(())
    }
}
