use async_trait::async_trait;
use urf_core_db::repository::exists_by_id::ExistsById;
use urf_core_db::{DbError, DbResult, ProductModel};

use super::repo_impl::ProductRepositoryImpl;

impl ProductRepositoryImpl {
    pub(super) async fn exists_by_id_impl(
        repo: &ProductRepositoryImpl,
        id: i32,
    ) -> DbResult<bool> {
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or(DbError::TransactionConsumed)?;
        let exists: bool = sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM product WHERE id = $1)"#)
            .bind(id)
            .fetch_one(&mut **transaction)
            .await?;
        Ok(exists)
    }
}

#[async_trait]
impl ExistsById<ProductModel> for ProductRepositoryImpl {
    async fn exists_by_id(&self, id: i32) -> DbResult<bool> {
        Self::exists_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::product::product_repository::test_utils::create_test_product;
    use crate::test_helper::setup_test_context;
    use serial_test::serial;
    use urf_core_db::repository::exists_by_id::ExistsById;
    use urf_core_db::repository::insert::Insert;

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_exists_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let product_repo = ctx.products_repository();

        let saved = product_repo.insert(create_test_product("Exists", 2)).await?;
        assert!(product_repo.exists_by_id(saved.id).await?);
        assert!(!product_repo.exists_by_id(i32::MAX).await?);

        Ok(())
    }
}
