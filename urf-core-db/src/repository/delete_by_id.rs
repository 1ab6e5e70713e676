use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::identifiable::Identifiable;

/// Generic repository trait for staging the removal of an entity
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait DeleteById<T: Identifiable>: Send + Sync {
    /// Stage removal of the entity with the given id
    ///
    /// # Returns
    /// * `Ok(true)` - A matching entity existed and its removal is staged
    /// * `Ok(false)` - No entity with this id exists; nothing was staged
    /// * `Err` - An error if the delete could not be staged
    async fn delete_by_id(&self, id: T::Id) -> DbResult<bool>;
}
