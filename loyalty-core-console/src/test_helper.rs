use chrono::{NaiveDate, TimeZone, Utc};
use loyalty_core_api::domain::Tier;
use loyalty_core_db::models::member::MemberModel;
use loyalty_core_db::models::reward::{RewardModel, RewardType};
use loyalty_core_db::models::transaction::{TransactionModel, TransactionStatus};
use loyalty_core_db::utils::truncated_heapless_string;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A plain member of `tier`, adjusted by `edit`.
pub fn member(name: &str, tier: Tier, edit: impl FnOnce(&mut MemberModel)) -> MemberModel {
    let mut member = MemberModel {
        id: Uuid::new_v4(),
        code: truncated_heapless_string("M900"),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: truncated_heapless_string("09400000000"),
        nrc: truncated_heapless_string("12/TEST(N)000000"),
        address: "Yangon".to_string(),
        tier,
        points: 0,
        retail_spend: Decimal::ZERO,
        wholesale_spend: Decimal::ZERO,
        join_date: date(2024, 1, 1),
        last_visit_date: date(2024, 6, 1),
        expiration_date: date(2025, 1, 1),
        visit_frequency: 1,
        is_birthday: false,
        login_count: 1,
        last_login: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    };
    edit(&mut member);
    member
}

pub fn reward(name: &str, points_cost: i64) -> RewardModel {
    RewardModel {
        id: Uuid::new_v4(),
        name: name.to_string(),
        reward_type: RewardType::Product,
        points_cost,
        image_url: String::new(),
        stock: 5,
    }
}

pub fn transaction(tier: Tier, amount: i64, date: NaiveDate, status: TransactionStatus) -> TransactionModel {
    TransactionModel {
        id: Uuid::new_v4(),
        member_id: Uuid::new_v4(),
        member_name: format!("{tier} member"),
        member_tier: tier,
        amount: Decimal::from(amount),
        date,
        status,
        description: "Purchase".to_string(),
    }
}
