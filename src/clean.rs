//! Row filtering and per-game feature derivation
//!
//! Cleaning is best-effort: unmappable names and garbled numbers become
//! `None` instead of failing the run. Only rows that break the retained-row
//! invariants (early seasons, missing betting data) are dropped.

use crate::record::{coerce_bool, coerce_f64, coerce_i32, present, GameRecord, RawGame};
use crate::teams::team_code;

/// Configuration for the row filter.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Earliest season kept (inclusive)
    pub min_season: i32,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self { min_season: 1979 }
    }
}

impl CleanConfig {
    /// Keep seasons from `season` onward
    pub fn with_min_season(mut self, season: i32) -> Self {
        self.min_season = season;
        self
    }
}

/// Counters collected while cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Rows handed to the filter
    pub rows_read: usize,
    /// Rows dropped for a missing, garbled or too-early season
    pub dropped_season: usize,
    /// Rows dropped for missing favorite, spread or over/under
    pub dropped_missing_key: usize,
    /// Home or away names with no code (counted per occurrence)
    pub unmapped_teams: usize,
    /// Retained rows whose spread failed numeric coercion
    pub non_numeric_spread: usize,
    /// Retained rows whose over/under line failed numeric coercion
    pub non_numeric_over_under: usize,
}

/// Filter raw rows and derive features for those retained.
///
/// Output order follows input order.
pub fn clean_games(raw: &[RawGame], config: &CleanConfig) -> (Vec<GameRecord>, CleanStats) {
    let mut stats = CleanStats {
        rows_read: raw.len(),
        ..CleanStats::default()
    };

    // Season filter runs first so the key-data counter only sees kept seasons
    let in_range: Vec<(i32, &RawGame)> = raw
        .iter()
        .filter_map(|game| match coerce_i32(&game.schedule_season) {
            Some(season) if season >= config.min_season => Some((season, game)),
            _ => {
                stats.dropped_season += 1;
                None
            }
        })
        .collect();

    let mut records = Vec::with_capacity(in_range.len());
    for (season, game) in in_range {
        let Some(favorite) = present(&game.team_favorite_id) else {
            stats.dropped_missing_key += 1;
            continue;
        };
        if present(&game.spread_favorite).is_none() || present(&game.over_under_line).is_none() {
            stats.dropped_missing_key += 1;
            continue;
        }

        let record = derive_features(season, favorite, game, &mut stats);
        records.push(record);
    }

    (records, stats)
}

/// Build the cleaned record for a row that passed the filters.
fn derive_features(
    season: i32,
    favorite: &str,
    game: &RawGame,
    stats: &mut CleanStats,
) -> GameRecord {
    let mut resolve = |name: &Option<String>| -> Option<String> {
        let full_name = present(name)?;
        match team_code(full_name) {
            Some(code) => Some(code.to_string()),
            None => {
                log::debug!("No team code for '{}'", full_name);
                stats.unmapped_teams += 1;
                None
            }
        }
    };
    let home_team_code = resolve(&game.team_home);
    let away_team_code = resolve(&game.team_away);

    let favorite_team_code = favorite.trim().to_string();
    let home_favored = home_team_code.as_deref() == Some(favorite_team_code.as_str());

    let score_home = coerce_i32(&game.score_home);
    let score_away = coerce_i32(&game.score_away);
    let point_diff = match (score_home, score_away) {
        (Some(home), Some(away)) => home.checked_sub(away),
        _ => None,
    };
    let home_won = point_diff.is_some_and(|diff| diff > 0);

    let spread = coerce_f64(&game.spread_favorite);
    if spread.is_none() {
        stats.non_numeric_spread += 1;
    }
    let over_under_line = coerce_f64(&game.over_under_line);
    if over_under_line.is_none() {
        stats.non_numeric_over_under += 1;
    }

    GameRecord {
        season,
        week_raw: present(&game.schedule_week).map(str::to_string),
        is_playoff: coerce_bool(&game.schedule_playoff).unwrap_or(false),
        score_home,
        score_away,
        favorite_team_code,
        spread,
        over_under_line,
        stadium_neutral: present(&game.stadium_neutral).map(str::to_string),
        home_team_code,
        away_team_code,
        home_favored,
        point_diff,
        home_won,
        week_index: None,
    }
}
