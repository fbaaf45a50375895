//! # PoW Ledger - a minimal hash-linked ledger
//!
//! Transactions wait in a FIFO pool. Minting takes up to two of them, searches
//! for a nonce whose SHA-256 starts with the sentinel prefix, links the block
//! to the previous tail and checkpoints its hash.
//!
//! ## How the code is organized
//! - `core/`: transactions, blocks, proof-of-work and the chain
//! - `storage/`: transaction pool and last-hash checkpoint stores
//! - `config/`: environment-driven settings for the binary
//! - `utils/`: hashing and clock helpers
//! - `cli/`: argument parsing and the chain listing
//!
//! Single process, single writer. Nothing is signed and difficulty is fixed.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod utils;

pub use cli::{render_block, render_chain, Command, Opt, TransferArg};
pub use config::{Config, GLOBAL_CONFIG};
pub use core::{
    validate_chain, Block, Blockchain, ProofOfWork, SearchLimit, Transaction, BATCH_SIZE,
    DIFFICULTY, SENTINEL,
};
pub use error::{BlockchainError, Result};
pub use storage::{
    load_last_hash, CheckpointStore, FileCheckpointStore, MemoryCheckpointStore, TransactionPool,
};
pub use utils::{current_timestamp, sha256_digest, sha256_hex};
