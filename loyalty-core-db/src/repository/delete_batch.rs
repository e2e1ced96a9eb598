use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for deleting multiple entities in a batch
///
/// Unknown ids are ignored.
#[async_trait]
pub trait DeleteBatch: Send + Sync {
    /// Delete multiple items by their IDs
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items actually deleted
    /// * `Err` - An error if the store could not be written
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
