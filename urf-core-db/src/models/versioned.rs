use serde::Serialize;

use crate::error::DbResult;
use crate::utils::hash_as_i64;

/// Trait for entities carrying an optimistic concurrency token
///
/// The token is the hash of the entity with the token itself set to 0.
/// A token of 0 means the entity has not been persisted yet, or that the
/// caller did not supply one.
pub trait Versioned: Serialize + Clone {
    /// Returns the current concurrency token
    fn get_hash(&self) -> i64;

    /// Replaces the concurrency token
    fn set_hash(&mut self, hash: i64);

    /// Computes the token for the current content of the entity
    fn compute_hash(&self) -> DbResult<i64> {
        let mut entity_for_hashing = self.clone();
        entity_for_hashing.set_hash(0);
        hash_as_i64(&entity_for_hashing)
    }

    /// Recomputes and stores the token, returning the previous one
    fn rehash(&mut self) -> DbResult<i64> {
        let previous_hash = self.get_hash();
        let computed_hash = self.compute_hash()?;
        self.set_hash(computed_hash);
        Ok(previous_hash)
    }
}
