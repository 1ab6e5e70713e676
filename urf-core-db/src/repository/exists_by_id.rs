use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::identifiable::Identifiable;

/// Generic repository trait for checking existence of an entity by its ID
#[async_trait]
pub trait ExistsById<T: Identifiable>: Send + Sync {
    async fn exists_by_id(&self, id: T::Id) -> DbResult<bool>;
}
