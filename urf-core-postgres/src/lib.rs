pub mod context;
pub mod postgres_repositories;
pub mod repository;
pub mod unit_of_work;
pub mod utils;

pub use context::{default_database_url, DbConfig, PgContextFactory};
pub use postgres_repositories::PostgresRepositories;
pub use repository::product::ProductRepositoryImpl;
pub use unit_of_work::{Executor, PgProductsUnitOfWork, PgSession};

#[cfg(test)]
pub mod test_helper;
