use crate::core::Transaction;
use std::collections::VecDeque;

/// Pending transactions in arrival order. Oldest leaves first.
#[derive(Debug, Default, Clone)]
pub struct TransactionPool {
    inner: VecDeque<Transaction>,
}

impl TransactionPool {
    pub fn new() -> TransactionPool {
        TransactionPool {
            inner: VecDeque::new(),
        }
    }

    pub fn add(&mut self, tx: Transaction) {
        self.inner.push_back(tx);
    }

    /// Remove up to `max_count` transactions from the head, oldest first.
    pub fn drain(&mut self, max_count: usize) -> Vec<Transaction> {
        let count = max_count.min(self.inner.len());
        self.inner.drain(..count).collect()
    }

    /// Put a batch back at the head, keeping its order, after a failed mint.
    pub fn requeue_front(&mut self, batch: Vec<Transaction>) {
        for tx in batch.into_iter().rev() {
            self.inner.push_front(tx);
        }
    }

    pub fn get_all(&self) -> Vec<Transaction> {
        self.inner.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
