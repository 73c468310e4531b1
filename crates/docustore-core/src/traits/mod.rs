//! Trait seams defined in core and implemented by infrastructure crates.

pub mod storage;

pub use storage::StorageBackend;
