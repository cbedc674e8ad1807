//! `shopkeep-store` — the record store abstraction and its in-memory backend.

pub mod memory;
pub mod record_store;

pub use memory::MemoryStore;
pub use record_store::{RecordStore, StoreError};
