//! Stateful services built on the ports.

pub mod preset_store;

pub use preset_store::{BattlePresetStore, DEFAULT_PRESET_CAPACITY};
