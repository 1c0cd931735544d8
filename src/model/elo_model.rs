use tracing::{info, trace, warn};

use crate::{
    model::{
        constants::ELO_SCALE,
        decay::DecayModel,
        rating_store::RatingStore,
        recorder::TimeSeriesRecorder,
        structures::{
            elo_config::EloConfig,
            match_event::{chronological_order, MatchEvent},
            player_rating::LeaderboardEntry,
            rating_snapshot::RatingSnapshot,
            round_tier::round_weight
        }
    },
    utils::progress_utils::progress_bar
};

pub struct EloModel {
    pub config: EloConfig,
    pub rating_store: RatingStore,
    pub decay_model: DecayModel,
    pub recorder: TimeSeriesRecorder
}

impl EloModel {
    pub fn new(config: EloConfig) -> EloModel {
        EloModel {
            config,
            rating_store: RatingStore::new(config.seed_elo),
            decay_model: DecayModel::new(config.decay_per_365d),
            recorder: TimeSeriesRecorder::new()
        }
    }

    /// Folds a batch of matches into the ratings, in chronological order.
    ///
    /// The batch is ordered before processing; callers do not need to sort.
    /// Calling this again continues from the current ratings.
    pub fn process(&mut self, events: &[MatchEvent]) {
        let ordered = chronological_order(events);
        let bar = progress_bar(ordered.len() as u64, "Processing match data");

        info!(matches = ordered.len(), config = ?self.config, "Processing matches");
        let undated = ordered.iter().filter(|e| e.tourney_date.is_none()).count();
        if undated > 0 {
            warn!(undated, "Matches without a date skip decay and activity tracking");
        }

        for event in ordered {
            self.process_match(event);
            bar.inc(1);
        }
        bar.finish_and_clear();

        info!(
            snapshots = self.recorder.len(),
            players = self.rating_store.len(),
            "Finished processing matches"
        );
    }

    /// # Match Processing
    ///
    /// Processes a single match. This is where all rating changes occur.
    ///
    /// Steps:
    /// 1. Apply decay to both players if enabled. Decayed ratings become the
    ///     foundation by which both players are rated in this match.
    /// 2. Compute the expected scores from the (decayed) ratings.
    /// 3. Scale the K-factor by the importance of the round.
    /// 4. Commit the new ratings and, for dated matches, the activity dates.
    /// 5. Record a snapshot of the before and after state.
    pub fn process_match(&mut self, event: &MatchEvent) -> &RatingSnapshot {
        let snapshot = self.rate(event);
        trace!(
            tourney_id = %snapshot.tourney_id,
            round = %snapshot.round,
            winner = %snapshot.winner_key,
            loser = %snapshot.loser_key,
            k = snapshot.k_used,
            exp_winner = snapshot.exp_winner,
            "Processed match"
        );

        self.recorder.record(snapshot);
        &self.recorder.snapshots()[self.recorder.len() - 1]
    }

    fn rate(&mut self, event: &MatchEvent) -> RatingSnapshot {
        let date = event.tourney_date;
        let winner = event.winner_key.as_str();
        let loser = event.loser_key.as_str();

        // Both players decay before either expectation is computed
        if self.decay_model.is_enabled() {
            self.decay_model.apply(&mut self.rating_store, winner, date);
            self.decay_model.apply(&mut self.rating_store, loser, date);
        }

        let winner_pre = self.rating_store.get_or_seed(winner);
        let loser_pre = self.rating_store.get_or_seed(loser);

        let exp_winner = expected_score(winner_pre, loser_pre);
        let exp_loser = 1.0 - exp_winner;

        let k = self.k_factor(&event.round);

        let winner_post = winner_pre + k * (1.0 - exp_winner);
        let loser_post = loser_pre + k * (0.0 - exp_loser);

        self.rating_store.commit(winner, winner_post);
        self.rating_store.commit(loser, loser_post);
        self.rating_store.record_match(winner);
        self.rating_store.record_match(loser);

        if let Some(date) = date {
            self.rating_store.set_last_active(winner, date);
            self.rating_store.set_last_active(loser, date);
        }

        RatingSnapshot {
            tourney_id: event.tourney_id.clone(),
            tourney_name: event.tourney_name.clone(),
            tourney_date: date,
            round: event.round.clone(),
            surface: event.surface.clone(),
            winner_key: event.winner_key.clone(),
            loser_key: event.loser_key.clone(),
            winner_name: event.winner_name.clone(),
            loser_name: event.loser_name.clone(),
            winner_elo_pre: winner_pre,
            loser_elo_pre: loser_pre,
            winner_elo_post: winner_post,
            loser_elo_post: loser_post,
            k_used: k,
            exp_winner,
            exp_loser
        }
    }

    /// `base_k + gs_bonus_k * round_weight(round)`
    pub fn k_factor(&self, round: &str) -> f64 {
        self.config.base_k + self.config.gs_bonus_k * round_weight(round)
    }

    pub fn timeseries(&self) -> &[RatingSnapshot] {
        self.recorder.snapshots()
    }

    pub fn into_timeseries(self) -> Vec<RatingSnapshot> {
        self.recorder.into_snapshots()
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.rating_store.leaderboard()
    }
}

/// Probability that a player rated `rating` beats one rated `opponent`:
/// `1 / (1 + 10^((opponent - rating) / 400))`
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / ELO_SCALE))
}

/// Runs a fresh model over `events` and returns one snapshot per match.
pub fn compute_elo_timeseries(events: &[MatchEvent], config: EloConfig) -> Vec<RatingSnapshot> {
    let mut model = EloModel::new(config);
    model.process(events);

    model.into_timeseries()
}
