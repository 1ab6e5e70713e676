use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{DbError, DbResult};
use crate::models::identifiable::Identifiable;
use crate::models::versioned::Versioned;
use crate::repository::{DeleteById, ExistsById, Find, Insert, Query, Update};

use super::store::MemoryTable;

/// A change waiting for the unit of work to commit
pub(crate) enum StagedChange<T> {
    Insert(T),
    Update { item: T, expected_hash: i64 },
    Delete { id: i32 },
}

impl<T: Identifiable<Id = i32> + Versioned> StagedChange<T> {
    /// Apply the change to `rows`, returning the id of the row it failed to match
    fn apply(&self, rows: &mut BTreeMap<i32, T>) -> Result<(), i32> {
        match self {
            StagedChange::Insert(item) => {
                rows.insert(item.get_id(), item.clone());
                Ok(())
            }
            StagedChange::Update {
                item,
                expected_hash,
            } => match rows.get_mut(&item.get_id()) {
                Some(row) if *expected_hash == 0 || row.get_hash() == *expected_hash => {
                    *row = item.clone();
                    Ok(())
                }
                _ => Err(item.get_id()),
            },
            StagedChange::Delete { id } => rows.remove(id).map(|_| ()).ok_or(*id),
        }
    }
}

/// Repository over a [`MemoryTable`], staging writes until commit
///
/// `staged` is `None` once the owning unit of work has committed.
pub struct MemoryRepository<T> {
    table: Arc<RwLock<MemoryTable<T>>>,
    staged: Mutex<Option<Vec<StagedChange<T>>>>,
}

impl<T: Identifiable<Id = i32> + Versioned> MemoryRepository<T> {
    pub(crate) fn new(table: Arc<RwLock<MemoryTable<T>>>) -> Self {
        Self {
            table,
            staged: Mutex::new(Some(Vec::new())),
        }
    }

    /// Committed rows with this session's staged changes applied on top
    fn view(&self) -> DbResult<BTreeMap<i32, T>> {
        let staged = self.staged.lock();
        let staged = staged.as_ref().ok_or(DbError::TransactionConsumed)?;
        let mut rows = self.table.read().rows.clone();
        for change in staged {
            // A change that no longer matches is reported at commit, not here
            let _ = change.apply(&mut rows);
        }
        Ok(rows)
    }

    fn stage(&self, change: StagedChange<T>) -> DbResult<()> {
        let mut staged = self.staged.lock();
        staged
            .as_mut()
            .ok_or(DbError::TransactionConsumed)?
            .push(change);
        Ok(())
    }

    /// Apply every staged change atomically, or none of them
    pub(crate) fn commit_staged(&self) -> DbResult<()> {
        let staged = self
            .staged
            .lock()
            .take()
            .ok_or(DbError::TransactionConsumed)?;

        let mut table = self.table.write();
        let mut rows = table.rows.clone();
        for change in &staged {
            if let Err(id) = change.apply(&mut rows) {
                tracing::warn!(entity = T::ENTITY_NAME, id, "Concurrent update detected");
                return Err(DbError::concurrency_conflict(T::ENTITY_NAME, id));
            }
        }
        table.rows = rows;
        tracing::debug!(entity = T::ENTITY_NAME, changes = staged.len(), "Committed staged changes");
        Ok(())
    }
}

#[async_trait]
impl<T: Identifiable<Id = i32> + Versioned> Query<T> for MemoryRepository<T> {
    async fn query(&self) -> DbResult<Vec<T>> {
        Ok(self.view()?.into_values().collect())
    }
}

#[async_trait]
impl<T: Identifiable<Id = i32> + Versioned> Find<T> for MemoryRepository<T> {
    async fn find(&self, id: i32) -> DbResult<Option<T>> {
        Ok(self.view()?.remove(&id))
    }
}

#[async_trait]
impl<T: Identifiable<Id = i32> + Versioned> Insert<T> for MemoryRepository<T> {
    async fn insert(&self, mut item: T) -> DbResult<T> {
        if self.staged.lock().is_none() {
            return Err(DbError::TransactionConsumed);
        }
        let id = self.table.write().next_id();
        item.set_id(id);
        item.set_hash(0);
        item.rehash()?;
        self.stage(StagedChange::Insert(item.clone()))?;
        Ok(item)
    }
}

#[async_trait]
impl<T: Identifiable<Id = i32> + Versioned> Update<T> for MemoryRepository<T> {
    async fn update(&self, mut item: T) -> DbResult<T> {
        let expected_hash = item.rehash()?;
        self.stage(StagedChange::Update {
            item: item.clone(),
            expected_hash,
        })?;
        Ok(item)
    }
}

#[async_trait]
impl<T: Identifiable<Id = i32> + Versioned> DeleteById<T> for MemoryRepository<T> {
    async fn delete_by_id(&self, id: i32) -> DbResult<bool> {
        if !self.view()?.contains_key(&id) {
            return Ok(false);
        }
        self.stage(StagedChange::Delete { id })?;
        Ok(true)
    }
}

#[async_trait]
impl<T: Identifiable<Id = i32> + Versioned> ExistsById<T> for MemoryRepository<T> {
    async fn exists_by_id(&self, id: i32) -> DbResult<bool> {
        Ok(self.view()?.contains_key(&id))
    }
}
