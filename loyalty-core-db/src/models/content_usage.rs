use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// View counter for a piece of member-facing content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUsageModel {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub views: u64,
}

impl Identifiable for ContentUsageModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentType {
    Video,
    Article,
    Promotion,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Video, ContentType::Article, ContentType::Promotion];
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Video => write!(f, "Video"),
            ContentType::Article => write!(f, "Article"),
            ContentType::Promotion => write!(f, "Promotion"),
        }
    }
}
