use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::deployment::Deployment;
use crate::error::DbResult;
use crate::models::identifiable::Identifiable;
use crate::models::product::ProductModel;
use crate::models::versioned::Versioned;

use super::repository::MemoryRepository;
use super::unit_of_work::MemoryUnitOfWork;

/// Committed rows of one table plus its id sequence
pub(crate) struct MemoryTable<T> {
    pub(crate) rows: BTreeMap<i32, T>,
    pub(crate) last_id: i32,
}

impl<T> MemoryTable<T> {
    /// Reserve the next key. Reserved keys are never reused, even if the
    /// staging unit of work is dropped.
    pub(crate) fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

/// Non-durable, process-local store for one entity type
///
/// Cloning shares the underlying table. Every session started from the store
/// stages its own changes and applies them atomically on commit.
pub struct MemoryStore<T> {
    table: Arc<RwLock<MemoryTable<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T> MemoryStore<T>
where
    T: Identifiable<Id = i32> + Versioned,
{
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(MemoryTable {
                rows: BTreeMap::new(),
                last_id: 0,
            })),
        }
    }

    /// Create a store holding the given rows with their explicit ids
    ///
    /// Tokens are recomputed and the sequence continues after the highest id.
    pub fn with_seed(seed: Vec<T>) -> DbResult<Self> {
        let store = Self::new();
        {
            let mut table = store.table.write();
            for mut item in seed {
                item.rehash()?;
                table.last_id = table.last_id.max(item.get_id());
                table.rows.insert(item.get_id(), item);
            }
        }
        Ok(store)
    }

    /// Number of committed rows
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a new unit of work against this store
    pub fn begin_session(&self) -> MemoryUnitOfWork<T> {
        MemoryUnitOfWork::new(MemoryRepository::new(self.table.clone()))
    }
}

impl<T> Default for MemoryStore<T>
where
    T: Identifiable<Id = i32> + Versioned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore<ProductModel> {
    /// Create a product store seeded the way the deployment's schema is
    pub fn for_deployment(deployment: Deployment) -> DbResult<Self> {
        Self::with_seed(deployment.seed_products()?)
    }
}
