use crate::storage::DEFAULT_CHECKPOINT_FILE;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

const CHECKPOINT_PATH_KEY: &str = "CHECKPOINT_PATH";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Seed from the environment, falling back to defaults.
    pub fn new() -> Config {
        let checkpoint_path =
            env::var(CHECKPOINT_PATH_KEY).unwrap_or_else(|_| String::from(DEFAULT_CHECKPOINT_FILE));
        Self::with_checkpoint_path(checkpoint_path)
    }

    pub fn with_checkpoint_path(path: String) -> Config {
        let mut map = HashMap::new();
        map.insert(String::from(CHECKPOINT_PATH_KEY), path);
        Config {
            inner: RwLock::new(map),
        }
    }

    pub fn get_checkpoint_path(&self) -> PathBuf {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner
            .get(CHECKPOINT_PATH_KEY)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHECKPOINT_FILE))
    }

    pub fn set_checkpoint_path(&self, path: String) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.insert(String::from(CHECKPOINT_PATH_KEY), path);
    }
}
