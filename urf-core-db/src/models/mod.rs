pub mod identifiable;
pub mod product;
pub mod versioned;

pub use identifiable::*;
pub use product::*;
pub use versioned::*;
