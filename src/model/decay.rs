use chrono::NaiveDate;
use tracing::debug;

use crate::model::{constants::DAYS_PER_YEAR, rating_store::RatingStore};

/// # How this works
/// - This gets called by the engine right before a player's rating is read
///     for a match played on date D (here, D is `current_date`)
/// - The player's last dated match was played on T
/// - Idle time is (D - T) in whole days
/// - The rating loses `decay_per_365d * idle_days / 365` points, linearly,
///     with no floor
///
/// # Rules
/// - Disabled unless `decay_per_365d > 0`.
/// - No decay without both dates (first appearance, or an undated match).
/// - No decay unless at least one whole day has passed.
///
/// The reduced rating is committed to the store, so it becomes the
/// foundation this player is rated from in the current match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayModel {
    decay_per_365d: f64
}

impl DecayModel {
    pub fn new(decay_per_365d: f64) -> DecayModel {
        DecayModel { decay_per_365d }
    }

    pub fn is_enabled(&self) -> bool {
        self.decay_per_365d > 0.0
    }

    /// Applies decay for `key` and returns the resulting current rating.
    pub fn apply(&self, store: &mut RatingStore, key: &str, current_date: Option<NaiveDate>) -> f64 {
        let rating = store.get_or_seed(key);

        let idle_days = match self.idle_days(store, key, current_date) {
            Some(days) => days,
            None => return rating
        };

        let decayed = rating - self.decay_amount(idle_days);
        debug!(
            player = key,
            idle_days,
            rating_before = rating,
            rating_after = decayed,
            "Applied inactivity decay"
        );

        store.commit(key, decayed);
        decayed
    }

    /// Rating points lost over `idle_days` days of inactivity.
    pub fn decay_amount(&self, idle_days: i64) -> f64 {
        self.decay_per_365d * idle_days as f64 / DAYS_PER_YEAR
    }

    /// Whole days since the player's last dated match, when decay applies.
    fn idle_days(&self, store: &RatingStore, key: &str, current_date: Option<NaiveDate>) -> Option<i64> {
        if !self.is_enabled() {
            return None;
        }

        let last_active = store.last_active(key)?;
        let idle_days = (current_date? - last_active).num_days();

        (idle_days > 0).then_some(idle_days)
    }
}
