//! Full team name to team code lookup
//!
//! Codes follow the franchise, not the city: relocated and renamed teams
//! share the code of the current franchise so favorites line up with
//! `team_favorite_id` across eras.

use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref TEAM_CODES: HashMap<&'static str, &'static str> = {
        let entries: &[(&str, &str)] = &[
            ("Arizona Cardinals", "ARI"),
            ("Phoenix Cardinals", "ARI"),
            ("St. Louis Cardinals", "ARI"),
            ("Atlanta Falcons", "ATL"),
            ("Baltimore Ravens", "BAL"),
            ("Buffalo Bills", "BUF"),
            ("Carolina Panthers", "CAR"),
            ("Chicago Bears", "CHI"),
            ("Cincinnati Bengals", "CIN"),
            ("Cleveland Browns", "CLE"),
            ("Dallas Cowboys", "DAL"),
            ("Denver Broncos", "DEN"),
            ("Detroit Lions", "DET"),
            ("Green Bay Packers", "GB"),
            ("Houston Texans", "HOU"),
            ("Indianapolis Colts", "IND"),
            ("Baltimore Colts", "IND"),
            ("Jacksonville Jaguars", "JAX"),
            ("Kansas City Chiefs", "KC"),
            ("Las Vegas Raiders", "LVR"),
            ("Oakland Raiders", "LVR"),
            ("Los Angeles Raiders", "LVR"),
            ("Los Angeles Chargers", "LAC"),
            ("San Diego Chargers", "LAC"),
            ("Los Angeles Rams", "LAR"),
            ("St. Louis Rams", "LAR"),
            ("Miami Dolphins", "MIA"),
            ("Minnesota Vikings", "MIN"),
            ("New England Patriots", "NE"),
            ("Boston Patriots", "NE"),
            ("New Orleans Saints", "NO"),
            ("New York Giants", "NYG"),
            ("New York Jets", "NYJ"),
            ("Philadelphia Eagles", "PHI"),
            ("Pittsburgh Steelers", "PIT"),
            ("San Francisco 49ers", "SF"),
            ("Seattle Seahawks", "SEA"),
            ("Tampa Bay Buccaneers", "TB"),
            ("Tennessee Titans", "TEN"),
            ("Tennessee Oilers", "TEN"),
            ("Houston Oilers", "TEN"),
            ("Washington Commanders", "WAS"),
            ("Washington Football Team", "WAS"),
            ("Washington Redskins", "WAS"),
        ];
        entries.iter().copied().collect()
    };
}

/// Look up the code for a full team name. Unknown names return `None`.
pub fn team_code(full_name: &str) -> Option<&'static str> {
    TEAM_CODES.get(full_name.trim()).copied()
}
