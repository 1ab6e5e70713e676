use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::identifiable::Identifiable;
use crate::models::product::ProductModel;
use crate::models::versioned::Versioned;
use crate::unit_of_work::{ProductsUnitOfWork, UnitOfWork, UnitOfWorkFactory};

use super::repository::MemoryRepository;
use super::store::MemoryStore;

/// Unit of work over a [`MemoryStore`]
pub struct MemoryUnitOfWork<T> {
    repository: MemoryRepository<T>,
}

impl<T: Identifiable<Id = i32> + Versioned> MemoryUnitOfWork<T> {
    pub(crate) fn new(repository: MemoryRepository<T>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<T: Identifiable<Id = i32> + Versioned> UnitOfWork for MemoryUnitOfWork<T> {
    async fn commit(&self) -> DbResult<()> {
        self.repository.commit_staged()
    }
}

impl ProductsUnitOfWork for MemoryUnitOfWork<ProductModel> {
    type ProductsRepository = MemoryRepository<ProductModel>;

    fn products_repository(&self) -> &Self::ProductsRepository {
        &self.repository
    }
}

#[async_trait]
impl UnitOfWorkFactory for MemoryStore<ProductModel> {
    type UnitOfWork = MemoryUnitOfWork<ProductModel>;

    async fn begin(&self) -> DbResult<Self::UnitOfWork> {
        Ok(self.begin_session())
    }
}
