//! What each console screen displays, computed from data-source snapshots.

pub mod events_editor;
pub mod member_profile;
pub mod member_search;
pub mod notifications;
pub mod promotions;
pub mod reward_shop;
pub mod tier_rules_editor;
