use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};

pub const DEFAULT_EXERCISES_DIR: &str = "exercises";
pub const DEFAULT_STATE_FILE: &str = ".rustlings-state.txt";
pub const DEFAULT_PROGRESS_MD: &str = "docs/PROGRESS.md";
pub const DEFAULT_BADGE_SVG: &str = "docs/badge.svg";
pub const DEFAULT_README: &str = "README.md";

#[derive(Debug, Clone)]
pub struct Config {
    pub exercises_dir: PathBuf,
    pub state_file: PathBuf,
    pub progress_md: PathBuf,
    pub badge_svg: PathBuf,
    pub readme: PathBuf,
    /// When false, nothing is written and only the JSON summary is produced.
    pub update_files: bool,
    pub verbosity: u8,
}

impl Config {
    /// Builds a config with every path at its default location under `root`.
    pub fn from_root(root: &Path) -> Self {
        Self {
            exercises_dir: root.join(DEFAULT_EXERCISES_DIR),
            state_file: root.join(DEFAULT_STATE_FILE),
            progress_md: root.join(DEFAULT_PROGRESS_MD),
            badge_svg: root.join(DEFAULT_BADGE_SVG),
            readme: root.join(DEFAULT_README),
            update_files: true,
            verbosity: 0,
        }
    }
}

fn command() -> Command {
    Command::new("exercise-progress")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reports exercise completion progress and refreshes the badge, report and README")
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Only print JSON; don't write files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .help("Repository root that default paths are resolved against")
                .num_args(1),
        )
        .arg(
            Arg::new("exercises")
                .long("exercises")
                .value_name("DIR")
                .help("Directory containing the exercise topics")
                .num_args(1),
        )
        .arg(
            Arg::new("state")
                .long("state")
                .value_name("FILE")
                .help("Completion state file")
                .num_args(1),
        )
        .arg(
            Arg::new("progress-md")
                .long("progress-md")
                .value_name("FILE")
                .help("Markdown progress report to write")
                .num_args(1),
        )
        .arg(
            Arg::new("badge")
                .long("badge")
                .value_name("FILE")
                .help("SVG badge to write")
                .num_args(1),
        )
        .arg(
            Arg::new("readme")
                .long("readme")
                .value_name("FILE")
                .help("README to patch with the progress block")
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
}

pub fn parse_args() -> Result<Config> {
    let matches = command().get_matches();

    let cwd = std::env::current_dir()?;
    let root = matches
        .get_one::<String>("root")
        .map(|r| cwd.join(r))
        .unwrap_or(cwd);

    let mut config = Config::from_root(&root);

    // Relative overrides are taken relative to the root, absolute ones as given.
    let resolve = |name: &str| matches.get_one::<String>(name).map(|p| root.join(p));

    if let Some(p) = resolve("exercises") {
        config.exercises_dir = p;
    }
    if let Some(p) = resolve("state") {
        config.state_file = p;
    }
    if let Some(p) = resolve("progress-md") {
        config.progress_md = p;
    }
    if let Some(p) = resolve("badge") {
        config.badge_svg = p;
    }
    if let Some(p) = resolve("readme") {
        config.readme = p;
    }

    config.update_files = !matches.get_flag("dry-run");
    config.verbosity = matches.get_count("verbose");

    Ok(config)
}
