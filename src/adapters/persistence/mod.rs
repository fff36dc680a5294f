//! Blob store adapters backing the preset store.

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryBlobStore;
pub use sqlite::SqliteBlobStore;
