use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::identifiable::Identifiable;

/// Generic repository trait for staging a new entity
///
/// The id carried by the caller is ignored: the store reserves a key from its
/// sequence while staging, so the returned entity already carries the id it
/// will have once the unit of work commits. Nothing is durable before commit.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// let staged = uow.products_repository().insert(product).await?;
/// uow.commit().await?;
/// println!("created product {}", staged.id);
/// ```
#[async_trait]
pub trait Insert<T: Identifiable>: Send + Sync {
    /// Stage an insert
    ///
    /// # Arguments
    /// * `item` - The entity to create
    ///
    /// # Returns
    /// * `Ok(T)` - The staged entity with its generated id and concurrency token
    /// * `Err` - An error if the insert could not be staged
    async fn insert(&self, item: T) -> DbResult<T>;
}
