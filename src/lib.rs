//! NFL Preprocess
//!
//! Turns the historical NFL scores and betting-lines dataset into a cleaned,
//! feature-augmented table for model training.
//!
//! This library provides:
//! - `clean`: Row filtering and per-game features (favorite, margin, result)
//! - `week_index`: Unified week numbering across regular season and playoffs
//! - `teams`: Full team name to franchise code lookup
//! - `pipeline`: CSV in, CSV out
//!
//! Binaries:
//! - `nfl-preprocess`: Runs the pipeline with the default data paths

pub mod clean;
pub mod pipeline;
pub mod record;
pub mod teams;
pub mod week_index;

pub use clean::{CleanConfig, CleanStats};
pub use pipeline::{PreprocessConfig, PreprocessSummary};
pub use record::{GameRecord, RawGame};
pub use week_index::{PlayoffRound, WeekIndexConfig, WeekIndexStats};
