pub mod config;
pub mod todo;

pub use config::*;
pub use todo::*;
