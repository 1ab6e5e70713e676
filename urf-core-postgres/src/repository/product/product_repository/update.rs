use async_trait::async_trait;
use urf_core_db::repository::update::Update;
use urf_core_db::{DbError, DbResult, Identifiable, ProductModel, Versioned};

use super::repo_impl::ProductRepositoryImpl;

impl ProductRepositoryImpl {
    pub(super) async fn update_impl(
        &self,
        mut item: ProductModel,
    ) -> DbResult<ProductModel> {
        let previous_hash = item.rehash()?;

        let rows_affected = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(DbError::TransactionConsumed)?;

            sqlx::query(
                r#"
                UPDATE product SET
                product_name = $2, unit_price = $3, hash = $4
                WHERE id = $1 AND ($5 = 0 OR hash = $5)
                "#,
            )
            .bind(item.id)
            .bind(item.name.as_str())
            .bind(item.unit_price)
            .bind(item.hash)
            .bind(previous_hash)
            .execute(&mut **transaction)
            .await?
            .rows_affected()
        };

        if rows_affected == 0 {
            tracing::warn!(id = item.id, previous_hash, "Concurrent update detected");
            self.executor
                .record_conflict(ProductModel::ENTITY_NAME, item.id);
        } else {
            tracing::debug!(id = item.id, "Staged product update");
        }

        Ok(item)
    }
}

#[async_trait]
impl Update<ProductModel> for ProductRepositoryImpl {
    async fn update(&self, item: ProductModel) -> DbResult<ProductModel> {
        self.update_impl(item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::product::product_repository::test_utils::create_test_product;
    use crate::test_helper::setup_test_context;
    use rust_decimal::Decimal;
    use serial_test::serial;
    use urf_core_db::repository::find::Find;
    use urf_core_db::repository::insert::Insert;
    use urf_core_db::repository::update::Update;
    use urf_core_db::{DbError, UnitOfWork};

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_update() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let product_repo = ctx.products_repository();

        let saved = product_repo.insert(create_test_product("Before", 1)).await?;

        let mut changed = saved.clone();
        changed.name = "After".try_into().unwrap();
        changed.unit_price = Decimal::new(250, 2);
        let updated = product_repo.update(changed).await?;

        assert_ne!(updated.hash, saved.hash);
        assert!(!product_repo.executor.has_conflicts());

        let reloaded = product_repo.find(saved.id).await?.unwrap();
        assert_eq!(reloaded, updated);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_update_with_stale_hash_fails_on_commit() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let product_repo = ctx.products_repository();

        let saved = product_repo.insert(create_test_product("Stale", 1)).await?;

        let mut stale = saved.clone();
        stale.hash = saved.hash.wrapping_add(1);
        stale.unit_price = Decimal::from(99);
        product_repo.update(stale).await?;

        assert!(product_repo.executor.has_conflicts());
        let result = ctx.uow.commit().await;
        assert!(matches!(result, Err(DbError::ConcurrencyConflict { .. })));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_update_non_existing_records_conflict() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let product_repo = ctx.products_repository();

        let mut missing = create_test_product("Missing", 1);
        missing.id = i32::MAX;
        product_repo.update(missing).await?;

        assert!(product_repo.executor.has_conflicts());

        Ok(())
    }
}
