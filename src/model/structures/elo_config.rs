use serde::{Deserialize, Serialize};

use crate::model::constants::{DEFAULT_BASE_K, DEFAULT_DECAY_PER_365D, DEFAULT_GS_BONUS_K, DEFAULT_SEED_ELO};

/// Numeric knobs of the rating fold. Values are taken as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloConfig {
    /// Initial rating for unseen players
    pub seed_elo: f64,
    /// K-factor before any round bonus
    pub base_k: f64,
    /// Extra K per round-weight unit. Zero disables round scaling.
    pub gs_bonus_k: f64,
    /// Points lost per 365 idle days. Zero disables decay.
    pub decay_per_365d: f64
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            seed_elo: DEFAULT_SEED_ELO,
            base_k: DEFAULT_BASE_K,
            gs_bonus_k: DEFAULT_GS_BONUS_K,
            decay_per_365d: DEFAULT_DECAY_PER_365D
        }
    }
}
