//! In-memory blob store for tests and ephemeral sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::DomainResult;
use crate::domain::ports::BlobStore;

/// A `BlobStore` over a mutex-guarded map. Writes replace the whole
/// value under the lock, so readers never see a partial blob.
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key directly, bypassing the trait. Test helper for
    /// exercising corruption handling.
    pub async fn seed(&self, key: &str, value: Vec<u8>) {
        self.blobs.lock().await.insert(key.to_string(), value);
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn get(&self, key: &str) -> DomainResult<Option<Vec<u8>>> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> DomainResult<()> {
        self.blobs.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        self.blobs.lock().await.remove(key);
        Ok(())
    }
}
