pub mod elo_config;
pub mod match_event;
pub mod player_rating;
pub mod rating_snapshot;
pub mod round_tier;
