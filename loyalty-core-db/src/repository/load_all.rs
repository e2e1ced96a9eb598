use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for reading a whole collection
///
/// Items come back in the collection's stored order, which report views
/// rely on for stable tie-breaking.
#[async_trait]
pub trait LoadAll<T: Identifiable>: Send + Sync {
    /// Snapshot of every entity in stored order
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;

    /// One page of the collection in stored order
    async fn load_page(&self, page: PageRequest) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
