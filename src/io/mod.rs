pub mod config_io;
pub mod logging;
pub mod storage;

pub use storage::{Loaded, StorageError, TodoFile};
