use crate::core::Block;
use crate::error::{BlockchainError, Result};
use crate::utils::sha256_hex;
use log::debug;

/// Character every leading position of an accepted hash must hold.
pub const SENTINEL: char = 'a';

/// How far the nonce search may go before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLimit {
    /// Keep going until a nonce is found. With a difficulty above the
    /// hash length this never returns.
    Unbounded,
    /// Try at most this many nonces, starting at 0.
    MaxAttempts(u64),
}

/// Linear nonce search: the first nonce from 0 whose hash starts with
/// `difficulty` sentinel characters wins, so the result is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofOfWork {
    difficulty: usize,
    limit: SearchLimit,
}

impl ProofOfWork {
    pub fn new(difficulty: usize) -> ProofOfWork {
        ProofOfWork {
            difficulty,
            limit: SearchLimit::Unbounded,
        }
    }

    pub fn with_limit(difficulty: usize, limit: SearchLimit) -> ProofOfWork {
        ProofOfWork { difficulty, limit }
    }

    pub fn get_difficulty(&self) -> usize {
        self.difficulty
    }

    /// Canonical string hashed for a given nonce: batch text, nonce, previous hash, id.
    /// The timestamp is deliberately left out.
    pub fn prepare_data(block: &Block, nonce: u64) -> String {
        format!(
            "{}{}{}{}",
            block.transactions_repr(),
            nonce,
            block.get_pre_block_hash(),
            block.get_id()
        )
    }

    pub fn meets_difficulty(hash: &str, difficulty: usize) -> bool {
        hash.chars().take(difficulty).filter(|c| *c == SENTINEL).count() == difficulty
    }

    /// Recompute the hash from the block's frozen fields and check it against
    /// both the stored hash and the difficulty rule.
    pub fn validate(block: &Block, difficulty: usize) -> bool {
        let data = Self::prepare_data(block, block.get_nonce());
        let hash = sha256_hex(data.as_bytes());
        hash == block.get_hash() && Self::meets_difficulty(&hash, difficulty)
    }

    /// Search for the accepted nonce. Only the nonce varies between attempts;
    /// the rest of `block` is read as-is.
    pub fn run(&self, block: &Block) -> Result<(u64, String)> {
        debug!(
            "Mining block {} with difficulty {}",
            block.get_id(),
            self.difficulty
        );
        let mut nonce: u64 = 0;
        loop {
            if let SearchLimit::MaxAttempts(max) = self.limit {
                if nonce >= max {
                    return Err(BlockchainError::Mining(format!(
                        "No nonce found for block {} within {max} attempts",
                        block.get_id()
                    )));
                }
            }

            let data = Self::prepare_data(block, nonce);
            let hash = sha256_hex(data.as_bytes());
            if Self::meets_difficulty(&hash, self.difficulty) {
                debug!("Block {} accepted at nonce {nonce}: {hash}", block.get_id());
                return Ok((nonce, hash));
            }

            nonce = nonce.checked_add(1).ok_or_else(|| {
                BlockchainError::Mining(format!("Nonce space exhausted for block {}", block.get_id()))
            })?;
        }
    }
}
