//! Unified week numbering across regular season and playoffs
//!
//! Regular-season games keep their week number. Playoff games are placed
//! after the last regular week of their season, one slot per round, so the
//! index ascends through the whole season.
//!
//! Indexing runs in two phases: first the per-season regular-season maximum
//! is collected over the full batch, then every row is mapped against it.

use crate::record::GameRecord;
use std::collections::HashMap;

/// Post-season rounds in playing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayoffRound {
    Wildcard,
    Divisional,
    ConferenceChampionship,
    SuperBowl,
}

impl PlayoffRound {
    /// Parse a schedule label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Wildcard" => Some(PlayoffRound::Wildcard),
            "Divisional" | "Division" => Some(PlayoffRound::Divisional),
            "Conference Championship" => Some(PlayoffRound::ConferenceChampionship),
            "Super Bowl" | "Superbowl" => Some(PlayoffRound::SuperBowl),
            _ => None,
        }
    }

    /// Weeks after the last regular-season week
    pub fn offset(self) -> u32 {
        match self {
            PlayoffRound::Wildcard => 1,
            PlayoffRound::Divisional => 2,
            PlayoffRound::ConferenceChampionship => 3,
            PlayoffRound::SuperBowl => 4,
        }
    }
}

/// Configuration for week indexing
#[derive(Debug, Clone)]
pub struct WeekIndexConfig {
    /// Regular-season length assumed for a season with no numbered weeks
    pub fallback_max_regular_week: u32,
    /// Offset given to playoff labels not recognised as a round
    pub unknown_round_offset: u32,
}

impl Default for WeekIndexConfig {
    fn default() -> Self {
        Self {
            fallback_max_regular_week: 17,
            unknown_round_offset: 1,
        }
    }
}

impl WeekIndexConfig {
    /// Override the assumed regular-season length
    pub fn with_fallback_max_regular_week(mut self, weeks: u32) -> Self {
        self.fallback_max_regular_week = weeks;
        self
    }
}

/// Counters collected while indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekIndexStats {
    /// Regular-season rows whose week is not a number (left unindexed)
    pub missing_week_num: usize,
    /// Playoff rows whose label is not a known round
    pub unknown_round_labels: usize,
    /// Playoff rows in a season with no regular-season rows
    pub fallback_rows: usize,
    /// Playoff rows left unindexed because their season's regular weeks
    /// are all non-numeric
    pub unindexed_playoff_rows: usize,
}

/// Parse a regular-season week label such as `"7"` or `"7.0"`.
pub fn parse_week_number(label: &str) -> Option<u32> {
    let label = label.trim();
    if let Ok(week) = label.parse::<u32>() {
        return Some(week);
    }
    let value: f64 = label.parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// Phase one: highest numbered regular-season week per season.
///
/// Every season with a regular-season row has an entry. The entry is `None`
/// when none of that season's weeks is a number.
pub fn regular_season_max_weeks(records: &[GameRecord]) -> HashMap<i32, Option<u32>> {
    let mut maxima: HashMap<i32, Option<u32>> = HashMap::new();
    for record in records.iter().filter(|r| !r.is_playoff) {
        let week = record.week_raw.as_deref().and_then(parse_week_number);
        let max = maxima.entry(record.season).or_insert(None);
        *max = (*max).max(week);
    }
    maxima
}

/// Phase two: index of a single row given the season maxima.
///
/// Seasons absent from `max_weeks` use the configured fallback length.
pub fn compute_week_index(
    record: &GameRecord,
    max_weeks: &HashMap<i32, Option<u32>>,
    config: &WeekIndexConfig,
) -> Option<u32> {
    if !record.is_playoff {
        return record.week_raw.as_deref().and_then(parse_week_number);
    }

    let max_week = match max_weeks.get(&record.season) {
        Some(max) => (*max)?,
        None => config.fallback_max_regular_week,
    };
    let offset = record
        .week_raw
        .as_deref()
        .and_then(PlayoffRound::from_label)
        .map_or(config.unknown_round_offset, PlayoffRound::offset);
    Some(max_week.saturating_add(offset))
}

/// Fill in `week_index` on every record.
pub fn assign_week_indices(records: &mut [GameRecord], config: &WeekIndexConfig) -> WeekIndexStats {
    let max_weeks = regular_season_max_weeks(records);
    let mut stats = WeekIndexStats::default();

    for record in records.iter_mut() {
        let label = record.week_raw.as_deref().unwrap_or("");
        if record.is_playoff {
            if !max_weeks.contains_key(&record.season) {
                stats.fallback_rows += 1;
            }
            if PlayoffRound::from_label(label).is_none() {
                log::warn!(
                    "Season {}: unrecognised playoff round '{}', using offset {}",
                    record.season,
                    label,
                    config.unknown_round_offset
                );
                stats.unknown_round_labels += 1;
            }
        }

        let week_index = compute_week_index(record, &max_weeks, config);
        if week_index.is_none() {
            if record.is_playoff {
                log::debug!(
                    "Season {}: no numeric regular-season week, '{}' left unindexed",
                    record.season,
                    label
                );
                stats.unindexed_playoff_rows += 1;
            } else {
                log::debug!(
                    "Season {}: regular-season week '{}' is not a number",
                    record.season,
                    label
                );
                stats.missing_week_num += 1;
            }
        }
        record.week_index = week_index;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(season: i32, week: &str, is_playoff: bool) -> GameRecord {
        GameRecord {
            season,
            week_raw: Some(week.to_string()),
            is_playoff,
            score_home: Some(20),
            score_away: Some(10),
            favorite_team_code: "NE".to_string(),
            spread: Some(-7.0),
            over_under_line: Some(47.5),
            stadium_neutral: None,
            home_team_code: Some("NE".to_string()),
            away_team_code: Some("NYJ".to_string()),
            home_favored: true,
            point_diff: Some(10),
            home_won: true,
            week_index: None,
        }
    }

    #[test]
    fn test_round_labels() {
        assert_eq!(PlayoffRound::from_label("Division"), Some(PlayoffRound::Divisional));
        assert_eq!(PlayoffRound::from_label("Superbowl"), Some(PlayoffRound::SuperBowl));
        assert_eq!(PlayoffRound::from_label("super bowl"), None);
        assert_eq!(PlayoffRound::from_label("Conference"), None);
        assert!(PlayoffRound::Wildcard < PlayoffRound::SuperBowl);
    }

    #[test]
    fn test_parse_week_number() {
        assert_eq!(parse_week_number("7"), Some(7));
        assert_eq!(parse_week_number(" 12 "), Some(12));
        assert_eq!(parse_week_number("3.0"), Some(3));
        assert_eq!(parse_week_number("3.5"), None);
        assert_eq!(parse_week_number("Wildcard"), None);
        assert_eq!(parse_week_number("-1"), None);
    }

    #[test]
    fn test_super_bowl_after_seventeen_weeks() {
        let mut records: Vec<GameRecord> = (1..=17).map(|w| game(2005, &w.to_string(), false)).collect();
        records.push(game(2005, "Super Bowl", true));

        let stats = assign_week_indices(&mut records, &WeekIndexConfig::default());
        assert_eq!(records.last().unwrap().week_index, Some(21));
        assert_eq!(records[0].week_index, Some(1));
        assert_eq!(records[16].week_index, Some(17));
        assert_eq!(stats, WeekIndexStats::default());
    }

    #[test]
    fn test_season_without_regular_weeks_uses_fallback() {
        let mut records = vec![game(1999, "Wildcard", true)];
        let stats = assign_week_indices(&mut records, &WeekIndexConfig::default());
        assert_eq!(records[0].week_index, Some(18));
        assert_eq!(stats.fallback_rows, 1);

        let config = WeekIndexConfig::default().with_fallback_max_regular_week(18);
        assign_week_indices(&mut records, &config);
        assert_eq!(records[0].week_index, Some(19));
    }

    #[test]
    fn test_rounds_ordered_after_regular_season() {
        let mut records = vec![
            game(2021, "Superbowl", true),
            game(2021, "1", false),
            game(2021, "Conference Championship", true),
            game(2021, "18", false),
            game(2021, "Division", true),
            game(2021, "Wildcard", true),
            game(2020, "17", false),
        ];
        assign_week_indices(&mut records, &WeekIndexConfig::default());

        let index_of = |label: &str| {
            records
                .iter()
                .find(|r| r.season == 2021 && r.week_raw.as_deref() == Some(label))
                .and_then(|r| r.week_index)
                .unwrap()
        };
        assert_eq!(index_of("Wildcard"), 19);
        assert_eq!(index_of("Division"), 20);
        assert_eq!(index_of("Conference Championship"), 21);
        assert_eq!(index_of("Superbowl"), 22);
        assert!(index_of("18") < index_of("Wildcard"));
    }

    #[test]
    fn test_maxima_are_per_season() {
        let records = vec![
            game(1982, "9", false),
            game(1982, "Wildcard", true),
            game(1983, "16", false),
            game(1983, "2", false),
        ];
        let maxima = regular_season_max_weeks(&records);
        assert_eq!(maxima.get(&1982), Some(&Some(9)));
        assert_eq!(maxima.get(&1983), Some(&Some(16)));
        assert_eq!(maxima.len(), 2);
    }

    #[test]
    fn test_unknown_round_defaults_to_first_offset() {
        let mut records = vec![game(2012, "17", false), game(2012, "Conference", true)];
        let stats = assign_week_indices(&mut records, &WeekIndexConfig::default());
        assert_eq!(records[1].week_index, Some(18));
        assert_eq!(stats.unknown_round_labels, 1);
    }

    #[test]
    fn test_non_numeric_regular_week_is_unindexed() {
        let mut records = vec![game(2012, "TBD", false), game(2012, "3", false)];
        let mut missing = game(2012, "", false);
        missing.week_raw = None;
        records.push(missing);

        let stats = assign_week_indices(&mut records, &WeekIndexConfig::default());
        assert_eq!(records[0].week_index, None);
        assert_eq!(records[1].week_index, Some(3));
        assert_eq!(records[2].week_index, None);
        assert_eq!(stats.missing_week_num, 2);
    }

    #[test]
    fn test_playoffs_unindexed_when_regular_weeks_are_not_numbers() {
        let mut records = vec![game(2001, "TBD", false), game(2001, "Wildcard", true)];
        let stats = assign_week_indices(&mut records, &WeekIndexConfig::default());

        assert_eq!(regular_season_max_weeks(&records).get(&2001), Some(&None));
        assert_eq!(records[1].week_index, None);
        assert_eq!(stats.fallback_rows, 0);
        assert_eq!(stats.unindexed_playoff_rows, 1);
        assert_eq!(stats.missing_week_num, 1);
    }

    #[test]
    fn test_round_label_must_match_exactly() {
        let mut records = vec![game(2010, "17", false), game(2010, "Super Bowl ", true)];
        let stats = assign_week_indices(&mut records, &WeekIndexConfig::default());
        assert_eq!(records[1].week_index, Some(18));
        assert_eq!(stats.unknown_round_labels, 1);
    }
}
