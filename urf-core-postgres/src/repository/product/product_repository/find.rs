use async_trait::async_trait;
use urf_core_db::repository::find::Find;
use urf_core_db::{DbError, DbResult, ProductModel};
use crate::utils::TryFromRow;

use super::repo_impl::ProductRepositoryImpl;

impl ProductRepositoryImpl {
    pub(super) async fn find_impl(
        repo: &ProductRepositoryImpl,
        id: i32,
    ) -> DbResult<Option<ProductModel>> {
        let query = r#"SELECT id, product_name, unit_price, hash FROM product WHERE id = $1"#;
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(DbError::TransactionConsumed)?;
            sqlx::query(query)
                .bind(id)
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.map(|row| ProductModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl Find<ProductModel> for ProductRepositoryImpl {
    async fn find(&self, id: i32) -> DbResult<Option<ProductModel>> {
        Self::find_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::product::product_repository::test_utils::create_test_product;
    use crate::test_helper::setup_test_context;
    use serial_test::serial;
    use urf_core_db::repository::find::Find;
    use urf_core_db::repository::insert::Insert;

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_find() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let product_repo = ctx.products_repository();

        let saved = product_repo.insert(create_test_product("Find Me", 7)).await?;

        let found = product_repo.find(saved.id).await?;
        assert_eq!(found, Some(saved));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_find_non_existing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let product_repo = ctx.products_repository();

        assert!(product_repo.find(i32::MAX).await?.is_none());

        Ok(())
    }
}
