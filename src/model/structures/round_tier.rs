use crate::model::constants::{
    FINAL_WEIGHT, QUARTER_FINAL_WEIGHT, ROUND_OF_16_WEIGHT, ROUND_OF_32_WEIGHT, ROUND_OF_64_WEIGHT,
    SEMI_FINAL_WEIGHT, UNCLASSIFIED_ROUND_WEIGHT
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Draw stages that earn a K-factor bonus.
///
/// Declaration order is the matching priority: a round label is classified
/// by the first tier whose rule accepts it. Labels no tier accepts
/// (qualifying codes, round robin, R128, ...) carry no bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RoundTier {
    /// Exactly `F`
    Final,
    /// Contains `SF`
    SemiFinal,
    /// Contains `QF`
    QuarterFinal,
    /// Contains `16`
    RoundOf16,
    /// Contains `32`
    RoundOf32,
    /// Contains `64`
    RoundOf64
}

impl RoundTier {
    /// Classifies a round label. Matching is case-insensitive.
    pub fn classify(round: &str) -> Option<RoundTier> {
        let label = round.to_uppercase();

        RoundTier::iter().find(|tier| tier.accepts(&label))
    }

    pub fn weight(self) -> f64 {
        match self {
            RoundTier::Final => FINAL_WEIGHT,
            RoundTier::SemiFinal => SEMI_FINAL_WEIGHT,
            RoundTier::QuarterFinal => QUARTER_FINAL_WEIGHT,
            RoundTier::RoundOf16 => ROUND_OF_16_WEIGHT,
            RoundTier::RoundOf32 => ROUND_OF_32_WEIGHT,
            RoundTier::RoundOf64 => ROUND_OF_64_WEIGHT
        }
    }

    // `label` is already uppercased
    fn accepts(self, label: &str) -> bool {
        match self {
            RoundTier::Final => label == "F",
            RoundTier::SemiFinal => label.contains("SF"),
            RoundTier::QuarterFinal => label.contains("QF"),
            RoundTier::RoundOf16 => label.contains("16"),
            RoundTier::RoundOf32 => label.contains("32"),
            RoundTier::RoundOf64 => label.contains("64")
        }
    }
}

/// Number of K-factor bonus units a round is worth.
pub fn round_weight(round: &str) -> f64 {
    RoundTier::classify(round).map_or(UNCLASSIFIED_ROUND_WEIGHT, RoundTier::weight)
}
