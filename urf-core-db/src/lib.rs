pub mod deployment;
pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod unit_of_work;
pub mod utils;

pub use deployment::*;
pub use error::*;
pub use models::*;
pub use unit_of_work::*;
