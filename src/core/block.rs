use crate::core::{ProofOfWork, Transaction};
use crate::error::Result;
use crate::utils::current_timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    id: usize,
    timestamp: i64,
    pre_block_hash: String,
    hash: String,
    transactions: Vec<Transaction>,
    nonce: u64,
}

impl Block {
    /// Create a block over `transactions` and mine it. The returned block is
    /// frozen: nonce and hash are never recomputed afterwards.
    pub fn new_block(
        pre_block_hash: String,
        transactions: Vec<Transaction>,
        id: usize,
        pow: &ProofOfWork,
    ) -> Result<Block> {
        let mut block = Block {
            id,
            timestamp: current_timestamp()?,
            pre_block_hash,
            hash: String::new(),
            transactions,
            nonce: 0,
        };

        let (nonce, hash) = pow.run(&block)?;
        block.nonce = nonce;
        block.hash = hash;
        debug!("Block {id} mined with nonce {nonce}");

        Ok(block)
    }

    /// Textual form of the batch, e.g. `[{id A B 10.000000} {id B C 5.000000}]`.
    pub fn transactions_repr(&self) -> String {
        let parts: Vec<String> = self.transactions.iter().map(|tx| tx.to_string()).collect();
        format!("[{}]", parts.join(" "))
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn get_pre_block_hash(&self) -> &str {
        self.pre_block_hash.as_str()
    }

    pub fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_id(&self) -> usize {
        self.id
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }

    pub fn is_genesis(&self) -> bool {
        self.pre_block_hash.is_empty()
    }
}
