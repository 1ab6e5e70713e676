pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod router;
pub mod server;

pub use config::{Cli, Command};
pub use error::*;
pub use router::{build_router, AppState};
