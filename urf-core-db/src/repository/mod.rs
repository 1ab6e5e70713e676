pub mod delete_by_id;
pub mod exists_by_id;
pub mod find;
pub mod insert;
pub mod query;
pub mod update;

// Re-exports
pub use delete_by_id::*;
pub use exists_by_id::*;
pub use find::*;
pub use insert::*;
pub use query::*;
pub use update::*;

use crate::models::identifiable::Identifiable;

/// Full data-access surface over one entity's table
///
/// Implemented automatically for every type providing all the operation traits.
pub trait Repository<T: Identifiable>:
    Query<T> + Find<T> + Insert<T> + Update<T> + DeleteById<T> + ExistsById<T>
{
}

impl<T, R> Repository<T> for R
where
    T: Identifiable,
    R: Query<T> + Find<T> + Insert<T> + Update<T> + DeleteById<T> + ExistsById<T>,
{
}
