use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Spend needed to leave a tier. The top tier has no further upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendThreshold {
    Finite(Decimal),
    Unbounded,
}

impl SpendThreshold {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            SpendThreshold::Finite(amount) => Some(*amount),
            SpendThreshold::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, SpendThreshold::Unbounded)
    }
}

impl std::fmt::Display for SpendThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpendThreshold::Finite(amount) => write!(f, "{amount}"),
            SpendThreshold::Unbounded => write!(f, "Infinity"),
        }
    }
}

impl Serialize for SpendThreshold {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SpendThreshold::Finite(amount) => Serialize::serialize(amount, serializer),
            SpendThreshold::Unbounded => serializer.serialize_str("Infinity"),
        }
    }
}

impl<'de> Deserialize<'de> for SpendThreshold {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Amount(Decimal),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Amount(amount) => Ok(SpendThreshold::Finite(amount)),
            Repr::Text(text) if text == "Infinity" => Ok(SpendThreshold::Unbounded),
            Repr::Text(text) => Err(serde::de::Error::custom(format!(
                "Invalid SpendThreshold: {text}"
            ))),
        }
    }
}

/// Where a member stands relative to the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierProgress {
    /// `ratio` is in `[0, 1]`.
    Progressing { ratio: Decimal, remaining: Decimal },
    /// Top tier: nothing left to reach.
    Complete,
}

impl TierProgress {
    pub fn ratio(&self) -> Decimal {
        match self {
            TierProgress::Progressing { ratio, .. } => *ratio,
            TierProgress::Complete => Decimal::ONE,
        }
    }

    pub fn remaining(&self) -> Decimal {
        match self {
            TierProgress::Progressing { remaining, .. } => *remaining,
            TierProgress::Complete => Decimal::ZERO,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, TierProgress::Complete)
    }

    /// Ratio as a whole percentage, rounded down.
    pub fn percent(&self) -> Decimal {
        (self.ratio() * Decimal::ONE_HUNDRED).floor()
    }
}

/// Computes display progress toward the next tier.
///
/// This never changes a member's tier; assignment is decided elsewhere and
/// only shown against the configured threshold here. A zero threshold counts
/// as already reached.
pub fn tier_progress(retail_spend: Decimal, next_threshold: SpendThreshold) -> TierProgress {
    let threshold = match next_threshold {
        SpendThreshold::Unbounded => return TierProgress::Complete,
        SpendThreshold::Finite(amount) => amount,
    };
    let spend = retail_spend.max(Decimal::ZERO);

    if threshold <= Decimal::ZERO {
        return TierProgress::Progressing {
            ratio: Decimal::ONE,
            remaining: Decimal::ZERO,
        };
    }

    TierProgress::Progressing {
        ratio: spend
            .checked_div(threshold)
            .map_or(Decimal::ONE, |ratio| ratio.min(Decimal::ONE)),
        remaining: (threshold - spend).max(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    fn d(v: i64) -> Decimal {
        Decimal::from_i64(v).unwrap()
    }

    #[test]
    fn test_progress_from_zero_spend() {
        let progress = tier_progress(d(0), SpendThreshold::Finite(d(20_000_000)));
        assert_eq!(progress.ratio(), d(0));
        assert_eq!(progress.remaining(), d(20_000_000));
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_progress_is_capped_when_spend_exceeds_threshold() {
        let progress = tier_progress(d(25_000_000), SpendThreshold::Finite(d(20_000_000)));
        assert_eq!(progress.ratio(), Decimal::ONE);
        assert_eq!(progress.remaining(), d(0));
    }

    #[test]
    fn test_progress_partial() {
        let progress = tier_progress(d(5_000_000), SpendThreshold::Finite(d(20_000_000)));
        assert_eq!(progress.ratio(), Decimal::new(25, 2));
        assert_eq!(progress.remaining(), d(15_000_000));
        assert_eq!(progress.percent(), d(25));
    }

    #[test]
    fn test_zero_threshold_counts_as_reached() {
        let progress = tier_progress(d(0), SpendThreshold::Finite(d(0)));
        assert_eq!(progress.ratio(), Decimal::ONE);
        assert_eq!(progress.remaining(), d(0));
    }

    #[test]
    fn test_top_tier_is_complete_regardless_of_spend() {
        for spend in [0, 1, 999_999_999] {
            let progress = tier_progress(d(spend), SpendThreshold::Unbounded);
            assert!(progress.is_complete());
            assert_eq!(progress.ratio(), Decimal::ONE);
        }
    }

    #[test]
    fn test_ratio_stays_within_unit_interval() {
        let thresholds = [0, 1, 7, 20_000_000];
        let spends = [-5, 0, 3, 7, 8, 19_999_999, 40_000_000];
        for threshold in thresholds {
            for spend in spends {
                let ratio = tier_progress(d(spend), SpendThreshold::Finite(d(threshold))).ratio();
                assert!(ratio >= Decimal::ZERO && ratio <= Decimal::ONE, "{spend}/{threshold}");
            }
        }
    }

    #[test]
    fn test_threshold_serde() {
        let json = serde_json::to_string(&SpendThreshold::Unbounded).unwrap();
        assert_eq!(json, "\"Infinity\"");
        let back: SpendThreshold = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SpendThreshold::Unbounded);

        let finite: SpendThreshold = serde_json::from_str("20000000").unwrap();
        assert_eq!(finite, SpendThreshold::Finite(d(20_000_000)));

        assert!(serde_json::from_str::<SpendThreshold>("\"lots\"").is_err());
    }

    #[test]
    fn test_finite_threshold_serde_round_trip() {
        let threshold = SpendThreshold::Finite(d(50_000_000));
        let json = serde_json::to_string(&threshold).unwrap();
        let back: SpendThreshold = serde_json::from_str(&json).unwrap();
        assert_eq!(back, threshold);
    }

    #[test]
    fn test_extreme_spend_over_tiny_threshold_caps_at_one() {
        let progress = tier_progress(Decimal::MAX, SpendThreshold::Finite(Decimal::new(1, 4)));
        assert_eq!(progress.ratio(), Decimal::ONE);
        assert_eq!(progress.remaining(), d(0));

        let progress = tier_progress(
            Decimal::from_i128_with_scale(10_i128.pow(28), 0),
            SpendThreshold::Finite(Decimal::new(1, 4)),
        );
        assert_eq!(progress.ratio(), Decimal::ONE);
    }
}
