//! Dual-keyed actor cache.
//!
//! One worker task per cache instance owns the maps; handles talk to it
//! over a FIFO channel, so every operation is applied whole and in send
//! order. Lookups wait for a reply, writes return once enqueued — a read
//! issued after a write call returns is behind it in the queue and
//! observes its effect.

use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};

use super::CHANNEL_CAPACITY;

/// A value addressable by a numeric id and a unique name.
pub trait DualKeyed: Clone + Send + 'static {
    fn id(&self) -> u32;

    fn name(&self) -> &str;
}

enum Command<V> {
    GetById {
        id: u32,
        reply: oneshot::Sender<Option<V>>,
    },
    GetByName {
        name: String,
        reply: oneshot::Sender<Option<V>>,
    },
    GetAll {
        reply: oneshot::Sender<Option<Vec<V>>>,
    },
    Set {
        value: V,
    },
    SetAll {
        values: Vec<V>,
    },
    RemoveById {
        id: u32,
    },
    RemoveByName {
        name: String,
    },
    Clear,
}

/// In-memory cache addressable by id and by name.
///
/// The two indexes are views over one logical set: an entry reachable by
/// id is always reachable by its name and vice versa. Also keeps a
/// distinguished full-listing slot for catalog-style entities, empty
/// until the first [`set_all`](Self::set_all).
///
/// Handles are cheap to clone; all clones address the same worker.
/// Construction spawns the worker, so it must happen inside a tokio
/// runtime.
pub struct DualKeyedCache<V: DualKeyed> {
    tx: mpsc::Sender<Command<V>>,
}

// Hand-written so cloning a handle never asks more of `V` than the
// struct itself does; only the sender is duplicated.
impl<V: DualKeyed> Clone for DualKeyedCache<V> {
    fn clone(&self) -> Self {
        Self { tx: self.tx.clone() }
    }
}

impl<V: DualKeyed> DualKeyedCache<V> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        tokio::spawn(run_worker(rx));
        Self { tx }
    }

    pub async fn get_by_id(&self, id: u32) -> Option<V> {
        let (reply, rx) = oneshot::channel();
        if self.tx.send(Command::GetById { id, reply }).await.is_err() {
            return None;
        }
        rx.await.unwrap_or(None)
    }

    pub async fn get_by_name(&self, name: &str) -> Option<V> {
        let (reply, rx) = oneshot::channel();
        let cmd = Command::GetByName {
            name: name.to_string(),
            reply,
        };
        if self.tx.send(cmd).await.is_err() {
            return None;
        }
        rx.await.unwrap_or(None)
    }

    /// The full listing set by the last [`set_all`](Self::set_all), or
    /// `None` if none has happened since construction or [`clear`](Self::clear).
    pub async fn get_all(&self) -> Option<Vec<V>> {
        let (reply, rx) = oneshot::channel();
        if self.tx.send(Command::GetAll { reply }).await.is_err() {
            return None;
        }
        rx.await.unwrap_or(None)
    }

    /// Insert or overwrite under both keys in one step.
    pub async fn set(&self, value: V) {
        // A failed send means the runtime is tearing the worker down;
        // dropping the write is the only sensible outcome then.
        let _ = self.tx.send(Command::Set { value }).await;
    }

    /// Replace the full listing and rebuild both indexes from it.
    pub async fn set_all(&self, values: Vec<V>) {
        let _ = self.tx.send(Command::SetAll { values }).await;
    }

    /// Remove from both indexes; no-op when absent. The full listing is
    /// left as-is.
    pub async fn remove_by_id(&self, id: u32) {
        let _ = self.tx.send(Command::RemoveById { id }).await;
    }

    /// Remove from both indexes; no-op when absent.
    pub async fn remove_by_name(&self, name: &str) {
        let cmd = Command::RemoveByName {
            name: name.to_string(),
        };
        let _ = self.tx.send(cmd).await;
    }

    /// Empty both indexes and the full-listing slot.
    pub async fn clear(&self) {
        let _ = self.tx.send(Command::Clear).await;
    }
}

impl<V: DualKeyed> Default for DualKeyedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Worker state: primary map by id, secondary name index pointing at the
/// primary key. Routing every name lookup through `by_id` means the two
/// indexes cannot disagree on which value an entry holds.
struct State<V> {
    by_id: HashMap<u32, V>,
    by_name: HashMap<String, u32>,
    listing: Option<Vec<V>>,
}

impl<V: DualKeyed> State<V> {
    fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            by_name: HashMap::new(),
            listing: None,
        }
    }

    fn set(&mut self, value: V) {
        let id = value.id();
        let name = value.name().to_string();
        // The entry previously under this id may carry another name, and
        // this name may previously have pointed at another id. Evict both
        // stale halves so the indexes keep agreeing.
        if let Some(old) = self.by_id.get(&id) {
            if old.name() != name {
                self.by_name.remove(old.name());
            }
        }
        if let Some(&other_id) = self.by_name.get(&name) {
            if other_id != id {
                self.by_id.remove(&other_id);
            }
        }
        self.by_name.insert(name, id);
        self.by_id.insert(id, value);
    }

    fn set_all(&mut self, values: Vec<V>) {
        self.by_id.clear();
        self.by_name.clear();
        for value in &values {
            self.set(value.clone());
        }
        self.listing = Some(values);
    }

    fn remove_by_id(&mut self, id: u32) {
        if let Some(value) = self.by_id.remove(&id) {
            self.by_name.remove(value.name());
        }
    }

    fn remove_by_name(&mut self, name: &str) {
        if let Some(id) = self.by_name.remove(name) {
            self.by_id.remove(&id);
        }
    }

    fn apply(&mut self, cmd: Command<V>) {
        match cmd {
            Command::GetById { id, reply } => {
                let _ = reply.send(self.by_id.get(&id).cloned());
            }
            Command::GetByName { name, reply } => {
                let value = self
                    .by_name
                    .get(&name)
                    .and_then(|id| self.by_id.get(id))
                    .cloned();
                let _ = reply.send(value);
            }
            Command::GetAll { reply } => {
                let _ = reply.send(self.listing.clone());
            }
            Command::Set { value } => self.set(value),
            Command::SetAll { values } => self.set_all(values),
            Command::RemoveById { id } => self.remove_by_id(id),
            Command::RemoveByName { name } => self.remove_by_name(&name),
            Command::Clear => {
                self.by_id.clear();
                self.by_name.clear();
                self.listing = None;
            }
        }
    }
}

async fn run_worker<V: DualKeyed>(mut rx: mpsc::Receiver<Command<V>>) {
    let mut state = State::new();
    // Ends when the last handle is dropped.
    while let Some(cmd) = rx.recv().await {
        state.apply(cmd);
    }
}
