pub mod balance;
pub mod checks;
pub mod engine;

pub use balance::*;
pub use checks::*;
pub use engine::*;
