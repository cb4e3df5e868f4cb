//! Keeping an auto-generated progress block inside the README up to date.

use crate::aggregate::Stats;
use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

pub const BEGIN_MARKER: &str = "<!-- RUSTLINGS_PROGRESS -->";
pub const END_MARKER: &str = "<!-- /RUSTLINGS_PROGRESS -->";

static BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(BEGIN_MARKER),
        regex::escape(END_MARKER)
    ))
    .expect("valid marker regex")
});

/// The marker-delimited block for `summary`, linking the badge at `badge_link`.
pub fn render_block(summary: &Stats, badge_link: &str) -> String {
    format!(
        "{BEGIN_MARKER}\n![Rustlings Progress]({badge_link})  \n**{} / {} completed ({}%)**\n{END_MARKER}",
        summary.done, summary.total, summary.pct
    )
}

/// Replaces every existing marker block in `content`, or appends one.
///
/// A begin marker with no end marker after it is not a block: a fresh block
/// is appended rather than leaving the README unchanged.
pub fn patch_readme_content(content: &str, summary: &Stats, badge_link: &str) -> String {
    let block = render_block(summary, badge_link);

    if BLOCK_RE.is_match(content) {
        BLOCK_RE
            .replace_all(content, NoExpand(&block))
            .into_owned()
    } else {
        format!("{content}\n\n{block}\n")
    }
}

/// Patches the README at `path` in place.
///
/// Returns `false` without touching anything when the README does not exist.
pub async fn patch_readme(path: &Path, summary: &Stats, badge_link: &str) -> Result<bool> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No README at {}, skipping patch", path.display());
            return Ok(false);
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read README: {}", path.display()));
        }
    };

    let patched = patch_readme_content(&content, summary, badge_link);
    fs::write(path, patched)
        .await
        .with_context(|| format!("Failed to write README: {}", path.display()))?;
    info!("Patched: {}", path.display());
    Ok(true)
}
