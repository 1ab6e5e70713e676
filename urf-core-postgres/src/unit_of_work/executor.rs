use parking_lot::Mutex as ParkingMutex;
use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use urf_core_db::DbError;

/// Shared handle on the transaction of one unit of work
///
/// Repositories built for the same session clone the executor and run every
/// statement inside `tx`. `tx` becomes `None` once the session is committed
/// or rolled back.
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
    conflicts: Arc<ParkingMutex<Vec<DbError>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
            conflicts: Arc::new(ParkingMutex::new(Vec::new())),
        }
    }

    /// Remember that a staged statement matched no row; the commit will fail with it
    pub fn record_conflict(&self, entity: &'static str, id: impl ToString) {
        self.conflicts
            .lock()
            .push(DbError::concurrency_conflict(entity, id));
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.lock().is_empty()
    }

    pub(crate) fn take_conflicts(&self) -> Vec<DbError> {
        std::mem::take(&mut *self.conflicts.lock())
    }
}
