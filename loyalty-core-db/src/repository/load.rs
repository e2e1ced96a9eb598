use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for looking up a single entity
///
/// A miss is not an error: callers get `Ok(None)` and decide how to render it.
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the store could not be read
    async fn load(&self, id: Uuid) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
