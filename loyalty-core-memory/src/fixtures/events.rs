use loyalty_core_api::domain::Tier;
use loyalty_core_db::models::event::EventModel;

use super::{date, fixture_id, FixtureKind};

pub fn events() -> Vec<EventModel> {
    vec![
        EventModel {
            id: fixture_id(FixtureKind::Event, 1),
            name: "Diamond Members Gala".to_string(),
            description: "An evening of fine dining for our top members.".to_string(),
            date: date(2024, 7, 20),
            location: "Sule Shangri-La, Yangon".to_string(),
            target_tiers: [Tier::Diamond].into_iter().collect(),
        },
        EventModel {
            id: fixture_id(FixtureKind::Event, 2),
            name: "New Collection Preview".to_string(),
            description: "First look at the autumn collection.".to_string(),
            date: date(2024, 8, 3),
            location: "Junction City, Yangon".to_string(),
            target_tiers: [Tier::Gold, Tier::Platinum, Tier::Diamond].into_iter().collect(),
        },
    ]
}
