use chrono::NaiveDate;
use serde::Serialize;

/// The state of one match at the moment it was processed.
///
/// `*_elo_pre` are the ratings the expectation was computed from (after any
/// inactivity decay), `*_elo_post` the ratings committed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSnapshot {
    pub tourney_id: String,
    pub tourney_name: Option<String>,
    pub tourney_date: Option<NaiveDate>,
    pub round: String,
    pub surface: Option<String>,
    pub winner_key: String,
    pub loser_key: String,
    pub winner_name: Option<String>,
    pub loser_name: Option<String>,
    pub winner_elo_pre: f64,
    pub loser_elo_pre: f64,
    pub winner_elo_post: f64,
    pub loser_elo_post: f64,
    pub k_used: f64,
    pub exp_winner: f64,
    pub exp_loser: f64
}

impl RatingSnapshot {
    /// Points gained by the winner
    pub fn winner_delta(&self) -> f64 {
        self.winner_elo_post - self.winner_elo_pre
    }

    /// Points lost by the loser (negative)
    pub fn loser_delta(&self) -> f64 {
        self.loser_elo_post - self.loser_elo_pre
    }
}
