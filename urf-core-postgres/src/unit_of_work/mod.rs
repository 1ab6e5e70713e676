pub mod executor;
pub mod products;
pub mod session;

pub use executor::Executor;
pub use products::PgProductsUnitOfWork;
pub use session::{PgSession, UnitOfWorkSession};
