use loyalty_core_api::domain::{Audience, Tier};
use loyalty_core_db::models::notification::NotificationModel;

use super::{date, fixture_id, FixtureKind};

/// Newest first.
pub fn notifications() -> Vec<NotificationModel> {
    vec![
        NotificationModel {
            id: fixture_id(FixtureKind::Notification, 2),
            title: "Monsoon Sale is live".to_string(),
            message: "Enjoy 15% off selected home goods until the end of July.".to_string(),
            sent_date: date(2024, 6, 1),
            target_tiers: Audience::all(),
        },
        NotificationModel {
            id: fixture_id(FixtureKind::Notification, 1),
            title: "Gala invitation".to_string(),
            message: "You are invited to the Diamond Members Gala.".to_string(),
            sent_date: date(2024, 5, 20),
            target_tiers: Audience::from_tiers([Tier::Diamond]),
        },
    ]
}
