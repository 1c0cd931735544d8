use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRating {
    pub key: String,
    pub rating: f64,
    /// Date of the most recent dated match, if any
    pub last_active: Option<NaiveDate>,
    /// Date of the first dated match, if any
    pub first_active: Option<NaiveDate>,
    pub matches_played: u32
}

impl PlayerRating {
    pub fn seeded(key: &str, seed_elo: f64) -> PlayerRating {
        PlayerRating {
            key: key.to_owned(),
            rating: seed_elo,
            last_active: None,
            first_active: None,
            matches_played: 0
        }
    }
}

/// A player's standing at the end of processing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    /// Share of players ranked strictly below this one, in percent
    pub percentile: f64,
    pub key: String,
    pub rating: f64,
    pub first_active: Option<NaiveDate>,
    pub last_active: Option<NaiveDate>,
    pub matches_played: u32
}
