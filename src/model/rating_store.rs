use chrono::NaiveDate;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::structures::player_rating::{LeaderboardEntry, PlayerRating};

/// Current rating and activity of every player seen so far.
///
/// Players are seeded lazily on first reference and never removed. Entries
/// keep first-seen order, which is also the tie-break order of the leaderboard.
pub struct RatingStore {
    seed_elo: f64,
    ratings: IndexMap<String, PlayerRating>
}

impl RatingStore {
    pub fn new(seed_elo: f64) -> RatingStore {
        RatingStore {
            seed_elo,
            ratings: IndexMap::new()
        }
    }

    /// Returns the current rating for `key`, seeding the player first if unseen.
    pub fn get_or_seed(&mut self, key: &str) -> f64 {
        self.entry(key).rating
    }

    /// Overwrites the current rating. Ratings may move in either direction,
    /// including below the seed value.
    pub fn commit(&mut self, key: &str, rating: f64) {
        self.entry(key).rating = rating;
    }

    pub fn last_active(&self, key: &str) -> Option<NaiveDate> {
        self.ratings.get(key).and_then(|r| r.last_active)
    }

    pub fn set_last_active(&mut self, key: &str, date: NaiveDate) {
        let entry = self.entry(key);
        entry.last_active = Some(date);
        entry.first_active.get_or_insert(date);
    }

    /// Counts one more match for the player.
    pub fn record_match(&mut self, key: &str) {
        self.entry(key).matches_played += 1;
    }

    /// Returns the stored rating without seeding.
    pub fn get(&self, key: &str) -> Option<&PlayerRating> {
        self.ratings.get(key)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRating> {
        self.ratings.values()
    }

    /// All players sorted by rating, highest first. Equal ratings keep
    /// first-seen order.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let total = self.ratings.len() as u32;

        self.ratings
            .values()
            .sorted_by(|a, b| b.rating.total_cmp(&a.rating))
            .enumerate()
            .map(|(i, rating)| {
                let rank = i as u32 + 1;
                LeaderboardEntry {
                    rank,
                    percentile: RatingStore::percentile(rank, total).unwrap_or_default(),
                    key: rating.key.clone(),
                    rating: rating.rating,
                    first_active: rating.first_active,
                    last_active: rating.last_active,
                    matches_played: rating.matches_played
                }
            })
            .collect()
    }

    fn entry(&mut self, key: &str) -> &mut PlayerRating {
        // Only allocate the key for players we have not seen yet
        let index = match self.ratings.get_index_of(key) {
            Some(index) => index,
            None => {
                self.ratings
                    .insert_full(key.to_owned(), PlayerRating::seeded(key, self.seed_elo))
                    .0
            }
        };

        &mut self.ratings[index]
    }

    /// `P = (n/N) * 100`
    fn percentile(rank: u32, total: u32) -> Option<f64> {
        if rank < 1 || rank > total {
            return None;
        }

        let n = total - rank; // The number of players below the player
        Some(n as f64 / total as f64 * 100.0)
    }
}
