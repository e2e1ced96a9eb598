use loyalty_core_api::domain::Tier;
use loyalty_core_db::models::transaction::{TransactionModel, TransactionStatus};

use super::{date, fixture_id, mmk, FixtureKind};

pub fn transactions() -> Vec<TransactionModel> {
    use TransactionStatus::{Failed, Success};

    [
        (1, 1, "Aung Kyaw Moe", Tier::Gold, 150_000, (2024, 5, 2), Success, "Groceries"),
        (2, 2, "Su Su Hlaing", Tier::Platinum, 820_000, (2024, 5, 3), Success, "Electronics"),
        (3, 4, "Thiri Win", Tier::Diamond, 2_400_000, (2024, 5, 5), Success, "Jewellery"),
        (4, 3, "Min Thant Zin", Tier::Normal, 45_000, (2024, 5, 7), Failed, "Household"),
        (5, 9, "Zaw Htet Aung", Tier::Diamond, 5_100_000, (2024, 5, 11), Success, "Wholesale order"),
        (6, 7, "Aung Min Thu", Tier::Platinum, 310_000, (2024, 5, 14), Success, "Apparel"),
        (7, 1, "Aung Kyaw Moe", Tier::Gold, 98_000, (2024, 5, 18), Failed, "Groceries"),
        (8, 10, "Ei Mon Kyaw", Tier::Gold, 275_000, (2024, 5, 21), Success, "Cosmetics"),
        (9, 8, "May Thu Kyaw", Tier::Normal, 60_000, (2024, 5, 25), Success, "Stationery"),
        (10, 2, "Su Su Hlaing", Tier::Platinum, 1_150_000, (2024, 5, 30), Success, "Furniture"),
        (11, 5, "Kyaw Zaw Lin", Tier::Normal, 30_000, (2024, 6, 1), Failed, "Snacks"),
    ]
    .into_iter()
    .map(|(n, member, member_name, member_tier, amount, (y, m, d), status, description)| TransactionModel {
        id: fixture_id(FixtureKind::Transaction, n),
        member_id: fixture_id(FixtureKind::Member, member),
        member_name: member_name.to_string(),
        member_tier,
        amount: mmk(amount),
        date: date(y, m, d),
        status,
        description: description.to_string(),
    })
    .collect()
}
