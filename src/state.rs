use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::Config;
use crate::store::ChunkStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<RwLock<ChunkStore>>,
    pub http_client: reqwest::Client,
    /// Serializes load operations: the store has a single-writer
    /// discipline and a load runs to completion once started.
    pub load_lock: Arc<tokio::sync::Mutex<()>>,
    pub ask_semaphore: Arc<tokio::sync::Semaphore>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            store: Arc::new(RwLock::new(ChunkStore::new())),
            http_client: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()?,
            load_lock: Arc::new(tokio::sync::Mutex::new(())),
            ask_semaphore: Arc::new(tokio::sync::Semaphore::new(3)),
        })
    }
}
