// Model constants
pub const DEFAULT_SEED_ELO: f64 = 1500.0;
pub const DEFAULT_BASE_K: f64 = 32.0;
pub const DEFAULT_GS_BONUS_K: f64 = 0.0;
pub const DEFAULT_DECAY_PER_365D: f64 = 0.0;
// Logistic scale of the expected-score curve
pub const ELO_SCALE: f64 = 400.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
// Round weights, highest stage first
pub const FINAL_WEIGHT: f64 = 8.0;
pub const SEMI_FINAL_WEIGHT: f64 = 6.0;
pub const QUARTER_FINAL_WEIGHT: f64 = 5.0;
pub const ROUND_OF_16_WEIGHT: f64 = 4.0;
pub const ROUND_OF_32_WEIGHT: f64 = 3.0;
pub const ROUND_OF_64_WEIGHT: f64 = 2.0;
pub const UNCLASSIFIED_ROUND_WEIGHT: f64 = 0.0;
// Sackmann tournament level code for Grand Slams
pub const GRAND_SLAM_LEVEL: &str = "G";
