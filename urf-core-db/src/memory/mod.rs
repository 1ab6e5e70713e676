//! Process-local backend with the same staging and commit semantics as the
//! Postgres repositories. Used when no database is configured, and by tests.

pub mod repository;
pub mod store;
pub mod unit_of_work;

pub use repository::MemoryRepository;
pub use store::MemoryStore;
pub use unit_of_work::MemoryUnitOfWork;
