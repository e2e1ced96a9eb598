use loyalty_core_api::domain::{SpendThreshold, Tier};
use loyalty_core_db::models::tier_rule::TierRuleModel;
use loyalty_core_db::utils::truncated_heapless_string;

use super::{fixture_id, mmk, FixtureKind};

fn rule(
    n: u32,
    tier: Tier,
    color_class: &str,
    hex: &str,
    next: Option<(i64, i64)>,
    benefits: &[&str],
) -> TierRuleModel {
    let (next_retail, next_wholesale) = match next {
        Some((retail, wholesale)) => (
            SpendThreshold::Finite(mmk(retail)),
            SpendThreshold::Finite(mmk(wholesale)),
        ),
        None => (SpendThreshold::Unbounded, SpendThreshold::Unbounded),
    };
    TierRuleModel {
        id: fixture_id(FixtureKind::TierRule, n),
        tier,
        color_class: truncated_heapless_string(color_class),
        hex: truncated_heapless_string(hex),
        next_retail,
        next_wholesale,
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
    }
}

/// Lowest tier first.
pub fn tier_rules() -> Vec<TierRuleModel> {
    vec![
        rule(1, Tier::Normal, "bg-gray-500", "#6B7280", Some((20_000_000, 100_000_000)), &[
            "1 point per 1,000 MMK spent",
            "Birthday greeting",
        ]),
        rule(2, Tier::Gold, "bg-yellow-500", "#E5B847", Some((50_000_000, 250_000_000)), &[
            "1.5 points per 1,000 MMK spent",
            "Birthday voucher",
            "Priority checkout",
        ]),
        rule(3, Tier::Platinum, "bg-gray-300", "#D1D5DB", Some((100_000_000, 500_000_000)), &[
            "2 points per 1,000 MMK spent",
            "Free delivery",
            "Exclusive event invitations",
        ]),
        rule(4, Tier::Diamond, "bg-cyan-200", "#A5F3FC", None, &[
            "3 points per 1,000 MMK spent",
            "Personal shopper",
            "Lounge access",
            "Annual gift hamper",
        ]),
    ]
}
