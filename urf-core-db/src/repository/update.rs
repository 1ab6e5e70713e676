use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::identifiable::Identifiable;

/// Generic repository trait for staging a full replacement of an entity
///
/// The row matching `item.get_id()` is replaced. When the item carries a
/// non-zero concurrency token the replacement only applies if the stored
/// token still equals it. A replacement that matches no row does not fail
/// here: it is recorded and surfaces as `DbError::ConcurrencyConflict`
/// when the unit of work commits.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Update<T: Identifiable>: Send + Sync {
    /// Stage an update
    ///
    /// # Arguments
    /// * `item` - The new state of the entity
    ///
    /// # Returns
    /// * `Ok(T)` - The staged entity with its recomputed concurrency token
    /// * `Err` - An error if the update could not be staged
    async fn update(&self, item: T) -> DbResult<T>;
}
