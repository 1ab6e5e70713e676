use async_trait::async_trait;
use urf_core_db::repository::query::Query;
use urf_core_db::{DbError, DbResult, ProductModel};
use crate::utils::TryFromRow;

use super::repo_impl::ProductRepositoryImpl;

impl ProductRepositoryImpl {
    pub(super) async fn query_impl(
        repo: &ProductRepositoryImpl,
    ) -> DbResult<Vec<ProductModel>> {
        let query = r#"SELECT id, product_name, unit_price, hash FROM product ORDER BY id"#;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(DbError::TransactionConsumed)?;
            sqlx::query(query).fetch_all(&mut **transaction).await?
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(ProductModel::try_from_row(&row)?);
        }
        tracing::debug!(count = items.len(), "Queried products");
        Ok(items)
    }
}

#[async_trait]
impl Query<ProductModel> for ProductRepositoryImpl {
    async fn query(&self) -> DbResult<Vec<ProductModel>> {
        Self::query_impl(self).await
    }
}
