use sqlx::PgPool;
use urf_core_db::{DbError, DbResult};

use super::executor::Executor;

/// A store session that hands its executor to the repositories built for it
pub trait UnitOfWorkSession: Send + Sync {
    fn executor(&self) -> &Executor;
}

/// One Postgres transaction, begun from the pool and committed at most once
///
/// Dropping the session without committing rolls the transaction back.
pub struct PgSession {
    executor: Executor,
}

impl PgSession {
    /// Begin a new transaction on a pooled connection
    pub async fn begin(pool: &PgPool) -> DbResult<Self> {
        let tx = pool.begin().await?;
        Ok(Self {
            executor: Executor::new(tx),
        })
    }

    /// Commit the transaction, or roll it back if any staged statement conflicted
    pub async fn commit(&self) -> DbResult<()> {
        let transaction = self
            .executor
            .tx
            .lock()
            .await
            .take()
            .ok_or(DbError::TransactionConsumed)?;

        if let Some(conflict) = self.executor.take_conflicts().into_iter().next() {
            tracing::warn!(error = %conflict, "Rolling back unit of work");
            transaction.rollback().await?;
            return Err(conflict);
        }

        transaction.commit().await?;
        tracing::debug!("Unit of work committed");
        Ok(())
    }
}

impl UnitOfWorkSession for PgSession {
    fn executor(&self) -> &Executor {
        &self.executor
    }
}
