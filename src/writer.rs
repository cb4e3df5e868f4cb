use crate::aggregate::ProgressReport;
use crate::badge::render_badge;
use crate::markdown::render_progress_md;
use crate::readme::patch_readme;
use crate::utils::markdown_link_path;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes the derived artifacts: badge, progress report and README block.
pub struct ReportWriter {
    badge_svg: PathBuf,
    progress_md: PathBuf,
    readme: PathBuf,
}

impl ReportWriter {
    pub fn new(badge_svg: PathBuf, progress_md: PathBuf, readme: PathBuf) -> Self {
        Self {
            badge_svg,
            progress_md,
            readme,
        }
    }

    pub async fn write_all(&self, report: &ProgressReport) -> Result<()> {
        self.write_badge(report).await?;
        self.write_progress_md(report).await?;
        self.patch_readme(report).await?;
        Ok(())
    }

    pub async fn write_badge(&self, report: &ProgressReport) -> Result<()> {
        write_creating_parent(&self.badge_svg, render_badge(report.summary.pct)).await
    }

    pub async fn write_progress_md(&self, report: &ProgressReport) -> Result<()> {
        write_creating_parent(&self.progress_md, render_progress_md(report)).await
    }

    /// Returns `false` when there is no README to patch.
    pub async fn patch_readme(&self, report: &ProgressReport) -> Result<bool> {
        let readme_dir = self.readme.parent().unwrap_or(Path::new(""));
        let link = markdown_link_path(&self.badge_svg, readme_dir);
        debug!("Badge link for README: {link}");
        patch_readme(&self.readme, &report.summary, &link).await
    }
}

async fn write_creating_parent(path: &Path, content: String) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create dir: {}", parent.display()))?;
    }

    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote: {}", path.display());
    Ok(())
}
