//! Infrastructure adapters: caches and persistence backends.

pub mod cache;
pub mod persistence;
