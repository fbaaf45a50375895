//! Core ledger functionality
//!
//! Transactions, blocks, the proof-of-work search and the chain that ties
//! them together.

pub mod block;
pub mod blockchain;
pub mod proof_of_work;
pub mod transaction;

pub use block::Block;
pub use blockchain::{validate_chain, Blockchain, BATCH_SIZE, DIFFICULTY};
pub use proof_of_work::{ProofOfWork, SearchLimit, SENTINEL};
pub use transaction::Transaction;
