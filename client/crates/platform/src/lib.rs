//! Platform Crate - Technical Infrastructure
//!
//! Client-side foundations that carry no domain meaning:
//! - Durable key/value storage (the local-storage equivalent)

pub mod storage;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError, StorageResult};
