//! NFL Preprocess - Clean historical game data for model training
//!
//! Reads the raw scores file, drops early seasons and rows without betting
//! data, derives per-game features and writes the cleaned CSV.

use anyhow::Result;
use clap::Parser;
use nfl_preprocess::pipeline::{preprocess_data, DEFAULT_INPUT, DEFAULT_OUTPUT};
use nfl_preprocess::{CleanConfig, PreprocessConfig, WeekIndexConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nfl-preprocess")]
#[command(about = "Clean historical NFL results and derive training features")]
struct Cli {
    /// Raw scores CSV file
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Cleaned CSV file (directory is created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Earliest season to keep
    #[arg(long, default_value = "1979")]
    min_season: i32,

    /// Regular-season length assumed for seasons with no numbered weeks
    #[arg(long, default_value = "17")]
    fallback_max_week: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = PreprocessConfig {
        input: cli.input,
        output: cli.output,
        clean: CleanConfig::default().with_min_season(cli.min_season),
        week_index: WeekIndexConfig::default()
            .with_fallback_max_regular_week(cli.fallback_max_week),
    };

    let summary = preprocess_data(&config)?;
    println!("{}", summary);
    println!("Preprocessed data saved to {}", config.output.display());

    Ok(())
}
