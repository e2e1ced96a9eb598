use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating multiple entities in a batch
///
/// Entities keep their position in the collection. Items whose content hash
/// matches the stored copy are skipped. The batch is all-or-nothing: an
/// unknown id fails the whole call.
#[async_trait]
pub trait UpdateBatch<T: Identifiable>: Send + Sync {
    /// Replace multiple items
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The entities that actually changed
    /// * `Err` - If an id is unknown or the store could not be written
    async fn update_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
