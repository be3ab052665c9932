//! Game record types and missing-value coercion
//!
//! Raw rows come straight from the scores CSV with every field optional.
//! Cleaned rows carry typed values where a coercion failure is an explicit
//! `None` rather than a sentinel.

use serde::{Deserialize, Serialize, Serializer};

/// Columns with no use downstream. Discarded when present.
pub const DROPPED_COLUMNS: [&str; 6] = [
    "schedule_date",
    "stadium",
    "weather_temperature",
    "weather_wind_mph",
    "weather_humidity",
    "weather_detail",
];

/// Columns the pipeline reads. The input must carry all of them.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "schedule_season",
    "schedule_week",
    "schedule_playoff",
    "team_home",
    "team_away",
    "score_home",
    "score_away",
    "team_favorite_id",
    "spread_favorite",
    "over_under_line",
];

/// Tokens read as "no value", on top of the empty field.
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One row of the raw scores file.
///
/// Columns not named here (including [`DROPPED_COLUMNS`]) are ignored by the
/// deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGame {
    pub schedule_season: Option<String>,
    pub schedule_week: Option<String>,
    pub schedule_playoff: Option<String>,
    pub team_home: Option<String>,
    pub team_away: Option<String>,
    pub score_home: Option<String>,
    pub score_away: Option<String>,
    pub team_favorite_id: Option<String>,
    pub spread_favorite: Option<String>,
    pub over_under_line: Option<String>,
    pub stadium_neutral: Option<String>,
}

/// A cleaned game with derived features.
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    #[serde(rename = "schedule_season")]
    pub season: i32,
    #[serde(rename = "schedule_week")]
    pub week_raw: Option<String>,
    #[serde(rename = "schedule_playoff")]
    pub is_playoff: bool,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    #[serde(rename = "team_favorite_id")]
    pub favorite_team_code: String,
    #[serde(rename = "spread_favorite")]
    pub spread: Option<f64>,
    pub over_under_line: Option<f64>,
    pub stadium_neutral: Option<String>,
    #[serde(rename = "team_home_abbrev")]
    pub home_team_code: Option<String>,
    #[serde(rename = "team_away_abbrev")]
    pub away_team_code: Option<String>,
    #[serde(rename = "home_team_favored", serialize_with = "serialize_flag")]
    pub home_favored: bool,
    pub point_diff: Option<i32>,
    #[serde(rename = "home_team_won", serialize_with = "serialize_flag")]
    pub home_won: bool,
    pub week_index: Option<u32>,
}

/// Booleans derived for training are written as 0/1.
fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

/// Return the field with NA tokens mapped to `None`.
///
/// Whitespace-only fields are kept: they are present, just not numeric.
pub fn present(field: &Option<String>) -> Option<&str> {
    match field.as_deref() {
        None | Some("") => None,
        Some(s) if NA_TOKENS.contains(&s) => None,
        Some(s) => Some(s),
    }
}

/// Coerce a field to a finite float. Anything unparsable is `None`.
pub fn coerce_f64(field: &Option<String>) -> Option<f64> {
    let value: f64 = present(field)?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Coerce a field to an integer, accepting integral floats such as `"24.0"`.
pub fn coerce_i32(field: &Option<String>) -> Option<i32> {
    let raw = present(field)?.trim();
    if let Ok(n) = raw.parse::<i32>() {
        return Some(n);
    }
    let value = coerce_f64(field)?;
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

/// Coerce a playoff flag. Accepts TRUE/FALSE in any case and 1/0.
pub fn coerce_bool(field: &Option<String>) -> Option<bool> {
    let raw = present(field)?.trim();
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Some(false)
    } else {
        None
    }
}
