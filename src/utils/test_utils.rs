use crate::model::{
    constants::GRAND_SLAM_LEVEL,
    structures::{match_event::MatchEvent, rating_snapshot::RatingSnapshot}
};
use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ROUNDS: [&str; 7] = ["R128", "R64", "R32", "R16", "QF", "SF", "F"];
const SURFACES: [&str; 3] = ["Hard", "Clay", "Grass"];

pub fn generate_event(
    tourney_id: &str,
    tourney_date: Option<NaiveDate>,
    match_num: Option<i32>,
    round: &str,
    winner_key: &str,
    loser_key: &str
) -> MatchEvent {
    MatchEvent {
        tourney_id: tourney_id.to_string(),
        tourney_name: Some(format!("Tournament {}", tourney_id)),
        tourney_date,
        tourney_level: Some(GRAND_SLAM_LEVEL.to_string()),
        match_num,
        round: round.to_string(),
        surface: Some("Hard".to_string()),
        winner_key: winner_key.to_string(),
        loser_key: loser_key.to_string(),
        winner_name: None,
        loser_name: None
    }
}

/// Generates `n` matches between random pairs of `player_keys`, spread over
/// consecutive weeks starting in January 2000. Reproducible across runs.
pub fn generate_events(n: i32, player_keys: &[&str]) -> Vec<MatchEvent> {
    if player_keys.len() < 2 {
        panic!("At least 2 players are required to generate matches");
    }

    // Initialize seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let start = NaiveDate::from_ymd_opt(2000, 1, 17).unwrap();

    let mut events = Vec::with_capacity(n as usize);
    for i in 0..n {
        let winner = rng.random_range(0..player_keys.len());
        // Offset by at least one so the loser always differs from the winner
        let loser = (winner + rng.random_range(1..player_keys.len())) % player_keys.len();
        let round = ROUNDS[rng.random_range(0..ROUNDS.len())];

        let mut event = generate_event(
            &format!("{}-{}", 2000 + i / 4, i % 4),
            Some(start + Duration::weeks(i as i64)),
            Some(rng.random_range(1..128)),
            round,
            player_keys[winner],
            player_keys[loser]
        );
        event.surface = Some(SURFACES[rng.random_range(0..SURFACES.len())].to_string());
        events.push(event);
    }

    events
}

/// A zero-sum snapshot between two players rated from the default seed.
pub fn generate_snapshot(winner_key: &str, loser_key: &str, winner_post: f64, loser_post: f64) -> RatingSnapshot {
    RatingSnapshot {
        tourney_id: "test".to_string(),
        tourney_name: None,
        tourney_date: NaiveDate::from_ymd_opt(2000, 1, 17),
        round: "F".to_string(),
        surface: None,
        winner_key: winner_key.to_string(),
        loser_key: loser_key.to_string(),
        winner_name: None,
        loser_name: None,
        winner_elo_pre: 1500.0,
        loser_elo_pre: 1500.0,
        winner_elo_post: winner_post,
        loser_elo_post: loser_post,
        k_used: 32.0,
        exp_winner: 0.5,
        exp_loser: 0.5
    }
}
