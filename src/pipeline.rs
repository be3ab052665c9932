//! End-to-end preprocessing: read the scores CSV, clean, index weeks, write.
//!
//! The transformation itself is [`preprocess_games`], a pure function of the
//! raw rows. The functions around it own the file handling.

use crate::clean::{clean_games, CleanConfig, CleanStats};
use crate::record::{GameRecord, RawGame, DROPPED_COLUMNS, REQUIRED_COLUMNS};
use crate::week_index::{assign_week_indices, WeekIndexConfig, WeekIndexStats};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default location of the raw scores file
pub const DEFAULT_INPUT: &str = "ml-model/data/spreadspoke_scores.csv";
/// Default location of the cleaned output
pub const DEFAULT_OUTPUT: &str = "ml-model/data/cleaned_nfl_data.csv";

// ============================================================================
// Configuration and summary
// ============================================================================

/// Configuration for a preprocessing run.
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Input CSV path
    pub input: PathBuf,
    /// Output CSV path (parent directory is created if missing)
    pub output: PathBuf,
    /// Row filter settings
    pub clean: CleanConfig,
    /// Week indexing settings
    pub week_index: WeekIndexConfig,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            clean: CleanConfig::default(),
            week_index: WeekIndexConfig::default(),
        }
    }
}

/// What a run did, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessSummary {
    pub clean: CleanStats,
    pub week_index: WeekIndexStats,
    /// Rows in the output file
    pub rows_written: usize,
}

impl fmt::Display for PreprocessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Kept {} of {} rows ({} before cutoff season, {} missing betting data, \
             {} unmapped team names, {} unindexed weeks, {} unknown playoff rounds)",
            self.rows_written,
            self.clean.rows_read,
            self.clean.dropped_season,
            self.clean.dropped_missing_key,
            self.clean.unmapped_teams,
            self.week_index.missing_week_num,
            self.week_index.unknown_round_labels,
        )
    }
}

// ============================================================================
// Processing
// ============================================================================

/// Clean the raw rows and assign week indices.
pub fn preprocess_games(
    raw: &[RawGame],
    clean_config: &CleanConfig,
    week_config: &WeekIndexConfig,
) -> (Vec<GameRecord>, PreprocessSummary) {
    let (mut records, clean) = clean_games(raw, clean_config);
    let week_index = assign_week_indices(&mut records, week_config);
    let summary = PreprocessSummary {
        clean,
        week_index,
        rows_written: records.len(),
    };
    (records, summary)
}

/// Run the whole pipeline from `config.input` to `config.output`.
pub fn preprocess_data(config: &PreprocessConfig) -> Result<PreprocessSummary> {
    let raw = read_raw_games(&config.input)?;
    log::info!("Read {} rows from {}", raw.len(), config.input.display());

    let (records, summary) = preprocess_games(&raw, &config.clean, &config.week_index);
    if summary.week_index.missing_week_num > 0 {
        log::warn!(
            "{} regular-season rows have no numeric week and no week index",
            summary.week_index.missing_week_num
        );
    }
    if summary.week_index.unindexed_playoff_rows > 0 {
        log::warn!(
            "{} playoff rows have no week index: their season has no numeric regular week",
            summary.week_index.unindexed_playoff_rows
        );
    }

    write_cleaned_games(&config.output, &records)?;
    log::info!("Preprocessed data saved to {}", config.output.display());
    Ok(summary)
}

// ============================================================================
// CSV I/O
// ============================================================================

/// Read every row of the raw scores file.
///
/// Fails if the file cannot be read or lacks a column the pipeline consumes.
pub fn read_raw_games(path: &Path) -> Result<Vec<RawGame>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let headers = reader.headers().context("Failed to read CSV header")?.clone();

    for name in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == name) {
            return Err(anyhow::anyhow!(
                "Required column '{}' not found in {}",
                name,
                path.display()
            ));
        }
    }

    let discarded: Vec<&str> = headers
        .iter()
        .filter(|h| DROPPED_COLUMNS.contains(h))
        .collect();
    if !discarded.is_empty() {
        log::debug!("Discarding columns: {}", discarded.join(", "));
    }

    let mut games = Vec::new();
    for (row_num, result) in reader.deserialize::<RawGame>().enumerate() {
        let game = result.with_context(|| format!("Failed to read CSV row {}", row_num + 1))?;
        games.push(game);
    }
    Ok(games)
}

/// Write cleaned records, creating the output directory if needed.
///
/// The CSV is rendered in memory first so a failure leaves no partial file.
pub fn write_cleaned_games(path: &Path, records: &[GameRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    for record in records {
        writer.serialize(record).context("Failed to serialize record")?;
    }
    if records.is_empty() {
        // serialize() writes the header with the first row
        writer.write_record(OUTPUT_COLUMNS)?;
    }
    let bytes = writer.into_inner().context("Failed to finish CSV output")?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write output file {}", path.display()))
}

/// Output header, matching the field order of [`GameRecord`].
const OUTPUT_COLUMNS: [&str; 15] = [
    "schedule_season",
    "schedule_week",
    "schedule_playoff",
    "score_home",
    "score_away",
    "team_favorite_id",
    "spread_favorite",
    "over_under_line",
    "stadium_neutral",
    "team_home_abbrev",
    "team_away_abbrev",
    "home_team_favored",
    "point_diff",
    "home_team_won",
    "week_index",
];
