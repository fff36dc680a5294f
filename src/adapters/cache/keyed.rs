//! Single-keyed actor cache for listing-style entries.

use std::collections::HashMap;
use std::hash::Hash;

use tokio::sync::{mpsc, oneshot};

use super::CHANNEL_CAPACITY;

enum Command<K, V> {
    Get {
        key: K,
        reply: oneshot::Sender<Option<V>>,
    },
    Set {
        key: K,
        value: V,
    },
    Remove {
        key: K,
    },
    Clear,
}

/// In-memory cache keyed by a single key, serialized through a worker
/// task like [`DualKeyedCache`](super::DualKeyedCache). Used for the
/// per-Pokemon listing caches (forms, locations) and the type cache.
///
/// Must be constructed inside a tokio runtime.
pub struct KeyedCache<K, V> {
    tx: mpsc::Sender<Command<K, V>>,
}

// Hand-written so cloning a handle requires nothing of `K` or `V`;
// only the sender is duplicated.
impl<K, V> Clone for KeyedCache<K, V> {
    fn clone(&self) -> Self {
        Self { tx: self.tx.clone() }
    }
}

impl<K, V> KeyedCache<K, V>
where
    K: Eq + Hash + Send + 'static,
    V: Clone + Send + 'static,
{
    pub fn new() -> Self {
        let (tx, mut rx) = mpsc::channel::<Command<K, V>>(CHANNEL_CAPACITY);
        tokio::spawn(async move {
            let mut entries: HashMap<K, V> = HashMap::new();
            while let Some(cmd) = rx.recv().await {
                match cmd {
                    Command::Get { key, reply } => {
                        let _ = reply.send(entries.get(&key).cloned());
                    }
                    Command::Set { key, value } => {
                        entries.insert(key, value);
                    }
                    Command::Remove { key } => {
                        entries.remove(&key);
                    }
                    Command::Clear => entries.clear(),
                }
            }
        });
        Self { tx }
    }

    pub async fn get(&self, key: K) -> Option<V> {
        let (reply, rx) = oneshot::channel();
        if self.tx.send(Command::Get { key, reply }).await.is_err() {
            return None;
        }
        rx.await.unwrap_or(None)
    }

    pub async fn set(&self, key: K, value: V) {
        let _ = self.tx.send(Command::Set { key, value }).await;
    }

    /// No-op when the key is absent.
    pub async fn remove(&self, key: K) {
        let _ = self.tx.send(Command::Remove { key }).await;
    }

    pub async fn clear(&self) {
        let _ = self.tx.send(Command::Clear).await;
    }
}

impl<K, V> Default for KeyedCache<K, V>
where
    K: Eq + Hash + Send + 'static,
    V: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
