// The checkpoint is the hash of the most recently mined block, kept as raw text.
// Every mint overwrites it; there is no history.

use crate::error::{BlockchainError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub const DEFAULT_CHECKPOINT_FILE: &str = "last_hash.txt";

/// Where the last block hash is persisted.
pub trait CheckpointStore {
    /// Replace the stored hash with `hash`.
    fn write(&self, hash: &str) -> Result<()>;

    /// Return the stored hash, or `CheckpointNotFound` if nothing was written yet.
    fn read(&self) -> Result<String>;
}

/// Read the checkpoint, treating absence as "no prior chain".
pub fn load_last_hash(store: &dyn CheckpointStore) -> Result<Option<String>> {
    match store.read() {
        Ok(hash) => Ok(Some(hash)),
        Err(BlockchainError::CheckpointNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Single file holding exactly the hash, no newline.
#[derive(Debug, Clone)]
pub struct FileCheckpointStore {
    path: PathBuf,
}

impl Default for FileCheckpointStore {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKPOINT_FILE)
    }
}

impl FileCheckpointStore {
    pub fn new<P: AsRef<Path>>(path: P) -> FileCheckpointStore {
        FileCheckpointStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn get_path(&self) -> &Path {
        self.path.as_path()
    }
}

impl CheckpointStore for FileCheckpointStore {
    fn write(&self, hash: &str) -> Result<()> {
        fs::write(&self.path, hash.as_bytes()).map_err(|e| {
            BlockchainError::Io(format!(
                "Failed to write checkpoint {}: {e}",
                self.path.display()
            ))
        })?;
        debug!("Checkpoint {} updated to {hash}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(hash) => Ok(hash),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(
                BlockchainError::CheckpointNotFound(self.path.display().to_string()),
            ),
            Err(e) => Err(BlockchainError::Io(format!(
                "Failed to read checkpoint {}: {e}",
                self.path.display()
            ))),
        }
    }
}

/// In-process store. Clones share the same slot, so a test can keep one handle
/// while the chain owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryCheckpointStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl MemoryCheckpointStore {
    pub fn new() -> MemoryCheckpointStore {
        MemoryCheckpointStore::default()
    }
}

impl CheckpointStore for MemoryCheckpointStore {
    fn write(&self, hash: &str) -> Result<()> {
        let mut slot = self
            .inner
            .write()
            .map_err(|_| BlockchainError::Io("Checkpoint lock poisoned".to_string()))?;
        *slot = Some(hash.to_string());
        Ok(())
    }

    fn read(&self) -> Result<String> {
        let slot = self
            .inner
            .read()
            .map_err(|_| BlockchainError::Io("Checkpoint lock poisoned".to_string()))?;
        slot.clone()
            .ok_or_else(|| BlockchainError::CheckpointNotFound("memory".to_string()))
    }
}
