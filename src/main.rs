use anyhow::Result;
use exercise_progress::{cli::parse_args, run_progress};
use log::LevelFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = parse_args()?;

    let level = match config.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let report = run_progress(&config).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
