use loyalty_core_db::models::content_usage::{ContentType, ContentUsageModel};

use super::{fixture_id, FixtureKind};

pub fn content_usage() -> Vec<ContentUsageModel> {
    [
        (1, "How to earn points faster", ContentType::Article, 1_840),
        (2, "Diamond tier walkthrough", ContentType::Video, 3_120),
        (3, "Thingyan Double Points", ContentType::Promotion, 5_400),
        (4, "Caring for lacquerware", ContentType::Article, 760),
        (5, "Member stories: Mandalay", ContentType::Video, 3_120),
        (6, "Monsoon Sale", ContentType::Promotion, 2_950),
    ]
    .into_iter()
    .map(|(n, name, content_type, views)| ContentUsageModel {
        id: fixture_id(FixtureKind::ContentUsage, n),
        name: name.to_string(),
        content_type,
        views,
    })
    .collect()
}
