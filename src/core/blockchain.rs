// This is the ledger itself: the mined blocks in order, the pool of pending
// transactions, and the checkpoint store that remembers the latest hash.
// Blocks live in a Vec, so the tail is always the last element and appending is O(1).

use crate::core::{Block, ProofOfWork, Transaction};
use crate::error::{BlockchainError, Result};
use crate::storage::{CheckpointStore, TransactionPool};
use log::{error, info};

/// Most transactions a single block takes from the pool.
pub const BATCH_SIZE: usize = 2;

/// Leading sentinel characters every block hash must carry.
pub const DIFFICULTY: usize = 2;

pub struct Blockchain {
    blocks: Vec<Block>,
    pool: TransactionPool,
    checkpoint: Box<dyn CheckpointStore>,
    pow: ProofOfWork,
}

impl Blockchain {
    // An empty chain that mines with the fixed difficulty and never gives up
    pub fn new(checkpoint: Box<dyn CheckpointStore>) -> Blockchain {
        Self::with_proof_of_work(checkpoint, ProofOfWork::new(DIFFICULTY))
    }

    // Same, but with a caller-chosen search (e.g. bounded for tests or services)
    pub fn with_proof_of_work(checkpoint: Box<dyn CheckpointStore>, pow: ProofOfWork) -> Blockchain {
        Blockchain {
            blocks: Vec::new(),
            pool: TransactionPool::new(),
            checkpoint,
            pow,
        }
    }

    /// Create a transaction and queue it for the next block.
    pub fn add_transaction(&mut self, sender: &str, recipient: &str, value: f64) -> Transaction {
        let tx = Transaction::new(sender, recipient, value);
        self.pool.add(tx.clone());
        tx
    }

    pub fn add_to_pool(&mut self, tx: Transaction) {
        self.pool.add(tx);
    }

    /// Mint the next block from up to `BATCH_SIZE` pending transactions.
    ///
    /// Returns `Ok(None)` when the pool is empty. A failed checkpoint write is
    /// logged and the block stays linked. If a bounded search gives up, the batch
    /// goes back to the head of the pool and the chain is untouched.
    pub fn mine_block(&mut self) -> Result<Option<Block>> {
        if self.pool.is_empty() {
            info!("No transactions available in the pool.");
            return Ok(None);
        }

        let id = self.blocks.len();
        let transactions = self.pool.drain(BATCH_SIZE);
        let pre_block_hash = self.last_hash().unwrap_or_default().to_string();

        let block = match Block::new_block(pre_block_hash, transactions.clone(), id, &self.pow) {
            Ok(block) => block,
            Err(e) => {
                self.pool.requeue_front(transactions);
                return Err(e);
            }
        };

        if block.is_genesis() {
            info!("Genesis block created: {}", block.get_hash());
        } else {
            info!("Block {id} created: {}", block.get_hash());
        }

        self.blocks.push(block.clone());

        if let Err(e) = self.checkpoint.write(block.get_hash()) {
            error!("Error writing last hash to checkpoint: {e}");
        }

        Ok(Some(block))
    }

    /// Visit every block from genesis to tail.
    pub fn for_each_block<F>(&self, mut visit: F)
    where
        F: FnMut(&Block),
    {
        for block in &self.blocks {
            visit(block);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn get_block(&self, id: usize) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub fn last_hash(&self) -> Option<&str> {
        self.blocks.last().map(|block| block.get_hash())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn pending_transactions(&self) -> Vec<Transaction> {
        self.pool.get_all()
    }

    pub fn pending_len(&self) -> usize {
        self.pool.len()
    }

    /// Run the chain check over this ledger with its own difficulty.
    pub fn verify(&self) -> Result<()> {
        validate_chain(&self.blocks, self.pow.get_difficulty())
    }

    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }
}

// The check an outside verifier would run: dense ids from 0, an empty
// previous hash only on the first block, every link pointing at its
// predecessor, and every hash reproducible from the block's own fields.
pub fn validate_chain(blocks: &[Block], difficulty: usize) -> Result<()> {
    let mut previous: Option<&Block> = None;

    for (index, block) in blocks.iter().enumerate() {
        if block.get_id() != index {
            return Err(BlockchainError::InvalidBlock(format!(
                "Block at position {index} has id {}",
                block.get_id()
            )));
        }

        let expected_pre_hash = previous.map(|b| b.get_hash()).unwrap_or("");
        if block.get_pre_block_hash() != expected_pre_hash {
            return Err(BlockchainError::InvalidBlock(format!(
                "Block {index} links to {:?}, expected {:?}",
                block.get_pre_block_hash(),
                expected_pre_hash
            )));
        }

        if !ProofOfWork::validate(block, difficulty) {
            return Err(BlockchainError::InvalidBlock(format!(
                "Block {index} fails proof-of-work at difficulty {difficulty}"
            )));
        }

        previous = Some(block);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchLimit;
    use crate::storage::{load_last_hash, MemoryCheckpointStore};

    struct FailingStore;

    impl CheckpointStore for FailingStore {
        fn write(&self, _hash: &str) -> Result<()> {
            Err(BlockchainError::Io("disk full".to_string()))
        }

        fn read(&self) -> Result<String> {
            Err(BlockchainError::Io("disk full".to_string()))
        }
    }

    fn new_chain() -> (Blockchain, MemoryCheckpointStore) {
        let store = MemoryCheckpointStore::new();
        (Blockchain::new(Box::new(store.clone())), store)
    }

    #[test]
    fn test_mine_on_empty_pool_is_noop() {
        let (mut chain, store) = new_chain();

        assert!(chain.mine_block().unwrap().is_none());
        assert_eq!(chain.len(), 0);
        assert!(chain.is_empty());
        assert_eq!(load_last_hash(&store).unwrap(), None);
    }

    #[test]
    fn test_genesis_block() {
        let (mut chain, store) = new_chain();
        chain.add_transaction("A", "B", 10.0);

        let block = chain.mine_block().unwrap().unwrap();
        assert_eq!(block.get_id(), 0);
        assert_eq!(block.get_pre_block_hash(), "");
        assert_eq!(block.get_transactions().len(), 1);
        assert!(ProofOfWork::validate(&block, DIFFICULTY));
        assert_eq!(chain.len(), 1);
        assert_eq!(store.read().unwrap(), block.get_hash());
    }

    #[test]
    fn test_batches_are_capped() {
        let (mut chain, _store) = new_chain();
        for i in 0..5 {
            chain.add_transaction("A", "B", i as f64);
        }

        let sizes: Vec<usize> = std::iter::from_fn(|| chain.mine_block().unwrap())
            .map(|block| block.get_transactions().len())
            .collect();

        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(chain.pending_len(), 0);
    }

    #[test]
    fn test_ids_are_dense_and_links_hold() {
        let (mut chain, _store) = new_chain();
        for i in 0..7 {
            chain.add_transaction("X", "Y", i as f64);
        }
        while chain.mine_block().unwrap().is_some() {}

        let ids: Vec<usize> = chain.iter().map(|b| b.get_id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);

        let blocks: Vec<&Block> = chain.iter().collect();
        for pair in blocks.windows(2) {
            assert_eq!(pair[1].get_pre_block_hash(), pair[0].get_hash());
        }
        assert!(chain.is_valid());
    }

    #[test]
    fn test_checkpoint_failure_does_not_roll_back() {
        let mut chain = Blockchain::new(Box::new(FailingStore));
        chain.add_transaction("A", "B", 1.0);

        let block = chain.mine_block().unwrap().unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.last_hash(), Some(block.get_hash()));
    }

    #[test]
    fn test_exhausted_search_restores_pool() {
        let store = MemoryCheckpointStore::new();
        let pow = ProofOfWork::with_limit(65, SearchLimit::MaxAttempts(10));
        let mut chain = Blockchain::with_proof_of_work(Box::new(store.clone()), pow);
        let first = chain.add_transaction("A", "B", 1.0);
        let second = chain.add_transaction("B", "C", 2.0);
        let third = chain.add_transaction("C", "D", 3.0);

        assert!(matches!(chain.mine_block(), Err(BlockchainError::Mining(_))));
        assert!(chain.is_empty());
        assert_eq!(chain.pending_transactions(), vec![first, second, third]);
        assert_eq!(load_last_hash(&store).unwrap(), None);
    }

    #[test]
    fn test_for_each_block_on_empty_chain() {
        let (chain, _store) = new_chain();
        let mut visited = 0;
        chain.for_each_block(|_| visited += 1);
        assert_eq!(visited, 0);
        assert!(chain.is_valid());
    }

    #[test]
    fn test_for_each_block_can_repeat() {
        let (mut chain, _store) = new_chain();
        chain.add_transaction("A", "B", 1.0);
        chain.add_transaction("B", "C", 1.0);
        chain.add_transaction("C", "D", 1.0);
        chain.mine_block().unwrap();
        chain.mine_block().unwrap();

        let mut first_pass = Vec::new();
        chain.for_each_block(|b| first_pass.push(b.get_id()));
        let mut second_pass = Vec::new();
        chain.for_each_block(|b| second_pass.push(b.get_id()));

        assert_eq!(first_pass, vec![0, 1]);
        assert_eq!(first_pass, second_pass);
    }

    fn mined_blocks(count: usize) -> Vec<Block> {
        let (mut chain, _store) = new_chain();
        for i in 0..count {
            chain.add_to_pool(Transaction::new("A", "B", i as f64));
        }
        while chain.mine_block().unwrap().is_some() {}
        chain.iter().cloned().collect()
    }

    // Rebuild a block with one field overwritten, going through its serde form
    fn with_field(block: &Block, field: &str, value: serde_json::Value) -> Block {
        let mut json = serde_json::to_value(block).unwrap();
        json[field] = value;
        serde_json::from_value(json).unwrap()
    }

    fn assert_invalid_block(blocks: &[Block], needle: &str) {
        match validate_chain(blocks, DIFFICULTY) {
            Err(BlockchainError::InvalidBlock(msg)) => {
                assert!(msg.contains(needle), "unexpected message: {msg}")
            }
            other => panic!("expected InvalidBlock, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_chain_accepts_mined_blocks() {
        let blocks = mined_blocks(3);
        assert_eq!(blocks.len(), 3);
        assert!(validate_chain(&blocks, DIFFICULTY).is_ok());
        assert!(validate_chain(&[], DIFFICULTY).is_ok());
    }

    #[test]
    fn test_validate_chain_rejects_tampered_nonce() {
        let mut blocks = mined_blocks(2);
        let nonce = blocks[1].get_nonce();
        blocks[1] = with_field(&blocks[1], "nonce", serde_json::json!(nonce + 1));
        assert_invalid_block(&blocks, "Block 1 fails proof-of-work");
    }

    #[test]
    fn test_validate_chain_rejects_broken_link() {
        let mut blocks = mined_blocks(2);
        blocks[1] = with_field(&blocks[1], "pre_block_hash", serde_json::json!("aa00"));
        assert_invalid_block(&blocks, "Block 1 links to");
    }

    #[test]
    fn test_validate_chain_rejects_id_gap() {
        let mut blocks = mined_blocks(3);
        blocks.remove(1);
        assert_invalid_block(&blocks, "Block at position 1 has id 2");
    }

    #[test]
    fn test_validate_chain_rejects_genesis_with_previous_hash() {
        let mut blocks = mined_blocks(1);
        blocks[0] = with_field(&blocks[0], "pre_block_hash", serde_json::json!("aa11"));
        assert_invalid_block(&blocks, "Block 0 links to");
    }

    #[test]
    fn test_get_block_by_id() {
        let (mut chain, _store) = new_chain();
        let tx = chain.add_transaction("A", "B", 1.0);
        chain.mine_block().unwrap();

        let block = chain.get_block(0).unwrap();
        assert_eq!(block.get_transactions(), &[tx]);
        assert!(chain.get_block(1).is_none());
        assert!(chain.verify().is_ok());
    }
}
