use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::product::ProductModel;
use crate::repository::Repository;

/// Groups the changes staged through its repositories into one atomic commit
///
/// A unit of work commits at most once. Dropping it without committing
/// discards everything staged through it.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Persist all staged changes as a single store transaction
    ///
    /// # Returns
    /// * `Ok(())` - Every staged change is durable
    /// * `Err(DbError::ConcurrencyConflict)` - A staged update or delete no longer
    ///   matched its row; nothing was persisted
    /// * `Err(DbError::TransactionConsumed)` - The unit of work was already committed
    async fn commit(&self) -> DbResult<()>;
}

/// Unit of work exposing the product repository
pub trait ProductsUnitOfWork: UnitOfWork {
    type ProductsRepository: Repository<ProductModel>;

    fn products_repository(&self) -> &Self::ProductsRepository;
}

/// Creates request-scoped units of work
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync + 'static {
    type UnitOfWork: ProductsUnitOfWork + 'static;

    /// Begin a new session against the store
    async fn begin(&self) -> DbResult<Self::UnitOfWork>;
}
