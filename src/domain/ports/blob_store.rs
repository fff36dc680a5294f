//! Key-value blob persistence port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// A key-value store of opaque byte blobs.
///
/// `set` replaces the whole value under a key in one step: implementors
/// must never expose a partially written blob, even to a concurrent
/// reader or after cancellation mid-write.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the blob under `key`; `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> DomainResult<Option<Vec<u8>>>;

    /// Replace the blob under `key`.
    async fn set(&self, key: &str, value: Vec<u8>) -> DomainResult<()>;

    /// Drop the key entirely. Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> DomainResult<()>;
}

#[async_trait]
impl<T: BlobStore + ?Sized> BlobStore for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> DomainResult<Option<Vec<u8>>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> DomainResult<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        (**self).remove(key).await
    }
}
