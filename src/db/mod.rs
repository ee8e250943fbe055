pub mod connection;
pub mod kv_repo;
pub mod memory;
pub mod migrations;
pub mod progress_store;

pub use connection::*;
pub use kv_repo::KeyValueStore;
pub use memory::MemoryStore;
pub use progress_store::ProgressStore;
