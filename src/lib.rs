//! # exercise-progress Library
//!
//! Progress reporting for an exercise repository:
//!
//! - Reads the learner's completion state file
//! - Scans the exercise tree, grouping exercises by topic directory
//! - Computes overall and per-topic completion
//! - Optionally writes an SVG badge, a Markdown report and a README block
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exercise_progress::{Config, run_progress};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut config = Config::from_root(&std::env::current_dir()?);
//!     config.update_files = false;
//!
//!     let report = run_progress(&config).await?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod badge;
pub mod cli;
pub mod filewalker;
pub mod markdown;
pub mod readme;
pub mod state;
pub mod utils;
pub mod writer;

pub use aggregate::{ProgressReport, Stats, aggregate, percent};
pub use cli::Config;
pub use filewalker::{Catalog, collect_exercises};
pub use state::read_completed_slugs;
pub use writer::ReportWriter;

use anyhow::Result;
use log::info;

/// Runs the whole pipeline and returns the report to print.
///
/// Files are only written when `config.update_files` is set.
pub async fn run_progress(config: &Config) -> Result<ProgressReport> {
    let completed = read_completed_slugs(&config.state_file).await?;
    let catalog = collect_exercises(&config.exercises_dir)?;
    let report = aggregate(&catalog, &completed);

    info!(
        "{} / {} exercises completed ({}%) across {} topics",
        report.summary.done,
        report.summary.total,
        report.summary.pct,
        report.topics.len()
    );

    if config.update_files {
        let writer = ReportWriter::new(
            config.badge_svg.clone(),
            config.progress_md.clone(),
            config.readme.clone(),
        );
        writer.write_all(&report).await?;
    } else {
        info!("Dry run: not writing any files");
    }

    Ok(report)
}
