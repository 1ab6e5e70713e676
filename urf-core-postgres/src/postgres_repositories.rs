use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use urf_core_db::{DbResult, UnitOfWorkFactory};

use crate::repository::product::ProductRepositoryImpl;
use crate::unit_of_work::{PgProductsUnitOfWork, PgSession, UnitOfWorkSession};

/// Hands out request-scoped units of work over a shared pool
#[derive(Clone)]
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create all repositories sharing a single transaction
    pub async fn create_products_unit_of_work(&self) -> DbResult<PgProductsUnitOfWork> {
        let session = PgSession::begin(&self.pool).await?;
        let executor = session.executor().clone();

        let products_repository = Arc::new(ProductRepositoryImpl::new(executor));

        Ok(PgProductsUnitOfWork::new(session, products_repository))
    }
}

#[async_trait]
impl UnitOfWorkFactory for PostgresRepositories {
    type UnitOfWork = PgProductsUnitOfWork;

    async fn begin(&self) -> DbResult<PgProductsUnitOfWork> {
        self.create_products_unit_of_work().await
    }
}
