use async_trait::async_trait;
use urf_core_db::repository::insert::Insert;
use urf_core_db::{DbError, DbResult, ProductModel, Versioned};

use super::repo_impl::ProductRepositoryImpl;

impl ProductRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &ProductRepositoryImpl,
        mut item: ProductModel,
    ) -> DbResult<ProductModel> {
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or(DbError::TransactionConsumed)?;

        // 1. Reserve the key so it can take part in the hash
        let id: i32 = sqlx::query_scalar(
            r#"SELECT nextval(pg_get_serial_sequence('product', 'id'))::int4"#,
        )
        .fetch_one(&mut **transaction)
        .await?;

        // 2. Compute hash over the entity with its final id
        item.id = id;
        item.hash = 0;
        item.rehash()?;

        // 3. Execute insert
        sqlx::query(
            r#"
            INSERT INTO product (id, product_name, unit_price, hash)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id)
        .bind(item.name.as_str())
        .bind(item.unit_price)
        .bind(item.hash)
        .execute(&mut **transaction)
        .await?;

        tracing::debug!(id = item.id, "Staged product insert");
        Ok(item)
    }
}

#[async_trait]
impl Insert<ProductModel> for ProductRepositoryImpl {
    async fn insert(&self, item: ProductModel) -> DbResult<ProductModel> {
        Self::insert_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::product::product_repository::test_utils::create_test_product;
    use crate::test_helper::setup_test_context;
    use serial_test::serial;
    use urf_core_db::repository::insert::Insert;
    use urf_core_db::Versioned;

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_insert() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let product_repo = ctx.products_repository();

        let mut product = create_test_product("Inserted", 12);
        product.id = 1;
        let saved = product_repo.insert(product).await?;

        // The caller's id is ignored; the sequence is past the seeded rows
        assert!(saved.id > 3);
        assert_eq!(saved.name.as_str(), "Inserted");
        assert_eq!(saved.hash, saved.compute_hash()?);

        Ok(())
    }
}
