use async_trait::async_trait;
use urf_core_db::repository::delete_by_id::DeleteById;
use urf_core_db::{DbError, DbResult, ProductModel};

use super::repo_impl::ProductRepositoryImpl;

impl ProductRepositoryImpl {
    pub(super) async fn delete_by_id_impl(
        repo: &ProductRepositoryImpl,
        id: i32,
    ) -> DbResult<bool> {
        let result = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(DbError::TransactionConsumed)?;
            sqlx::query(r#"DELETE FROM product WHERE id = $1"#)
                .bind(id)
                .execute(&mut **transaction)
                .await?
        };

        let deleted = result.rows_affected() > 0;
        tracing::debug!(id, deleted, "Staged product delete");
        Ok(deleted)
    }
}

#[async_trait]
impl DeleteById<ProductModel> for ProductRepositoryImpl {
    async fn delete_by_id(&self, id: i32) -> DbResult<bool> {
        Self::delete_by_id_impl(self, id).await
    }
}
