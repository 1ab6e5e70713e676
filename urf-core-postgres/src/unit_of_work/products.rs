use async_trait::async_trait;
use std::sync::Arc;
use urf_core_db::{DbResult, ProductsUnitOfWork, UnitOfWork};

use super::session::PgSession;
use crate::repository::product::ProductRepositoryImpl;

/// Request-scoped unit of work aggregating the product repository
pub struct PgProductsUnitOfWork {
    session: PgSession,
    products_repository: Arc<ProductRepositoryImpl>,
}

impl PgProductsUnitOfWork {
    pub fn new(session: PgSession, products_repository: Arc<ProductRepositoryImpl>) -> Self {
        Self {
            session,
            products_repository,
        }
    }
}

#[async_trait]
impl UnitOfWork for PgProductsUnitOfWork {
    async fn commit(&self) -> DbResult<()> {
        self.session.commit().await
    }
}

impl ProductsUnitOfWork for PgProductsUnitOfWork {
    type ProductsRepository = ProductRepositoryImpl;

    fn products_repository(&self) -> &ProductRepositoryImpl {
        &self.products_repository
    }
}
