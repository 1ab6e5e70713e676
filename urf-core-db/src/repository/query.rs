use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::identifiable::Identifiable;

/// Generic repository trait for listing every entity of a table
///
/// No paging or filtering is applied. Callers must not rely on ordering,
/// although implementations return rows by ascending id.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Query<ProductModel> for ProductRepositoryImpl {
///     async fn query(&self) -> DbResult<Vec<ProductModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Query<T: Identifiable>: Send + Sync {
    /// Load all entities visible to the current unit of work
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All entities, including ones staged but not yet committed
    /// * `Err` - An error if the query could not be executed
    async fn query(&self) -> DbResult<Vec<T>>;
}
