//! Data storage and persistence
//!
//! The pool of pending transactions and the last-hash checkpoint.

pub mod checkpoint;
pub mod memory_pool;

pub use checkpoint::{
    load_last_hash, CheckpointStore, FileCheckpointStore, MemoryCheckpointStore,
    DEFAULT_CHECKPOINT_FILE,
};
pub use memory_pool::TransactionPool;
