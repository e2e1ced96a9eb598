//! Static seed data loaded into the in-memory store at startup.
//!
//! Ids are deterministic so fixtures can reference each other and tests can
//! address known records.

pub mod content_usage;
pub mod dashboard;
pub mod events;
pub mod members;
pub mod notifications;
pub mod products;
pub mod promotions;
pub mod rewards;
pub mod tier_rules;
pub mod transactions;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Collection discriminator packed into the high half of fixture ids.
#[derive(Debug, Clone, Copy)]
#[repr(u32)]
pub enum FixtureKind {
    Member = 1,
    TierRule = 2,
    Reward = 3,
    Promotion = 4,
    Event = 5,
    Notification = 6,
    Product = 7,
    Transaction = 8,
    ContentUsage = 9,
}

pub fn fixture_id(kind: FixtureKind, n: u32) -> Uuid {
    Uuid::from_u128(((kind as u128) << 64) | n as u128)
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(crate) fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().unwrap_or_default()
}

pub(crate) fn mmk(amount: i64) -> Decimal {
    Decimal::from(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids_do_not_collide_across_kinds() {
        assert_ne!(fixture_id(FixtureKind::Member, 1), fixture_id(FixtureKind::Reward, 1));
        assert_eq!(fixture_id(FixtureKind::Member, 7), fixture_id(FixtureKind::Member, 7));
    }

    #[test]
    fn test_fixture_dates_are_valid() {
        for member in members::members() {
            assert!(member.join_date <= member.last_visit_date, "{}", member.code);
            assert_ne!(member.join_date, NaiveDate::default());
        }
    }

    #[test]
    fn test_transactions_reference_known_members() {
        let ids: Vec<Uuid> = members::members().iter().map(|m| m.id).collect();
        for transaction in transactions::transactions() {
            assert!(ids.contains(&transaction.member_id));
        }
    }
}
