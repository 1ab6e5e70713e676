use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for entities that can be uniquely identified by a store-generated key
pub trait Identifiable: Send + Sync + 'static {
    /// The key type of the entity's table
    type Id: Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static;

    /// Name used for the entity in logs and errors
    const ENTITY_NAME: &'static str;

    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Self::Id;

    /// Replaces the identifier, used when the store assigns a key on insert
    fn set_id(&mut self, id: Self::Id);
}
