pub mod repo_impl;
#[cfg(test)]
pub mod test_utils;
pub mod query;
pub mod find;
pub mod insert;
pub mod update;
pub mod delete_by_id;
pub mod exists_by_id;

pub use repo_impl::ProductRepositoryImpl;
