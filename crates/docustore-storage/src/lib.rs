//! Filesystem storage backend for the folder file store.

pub mod filename;
pub mod local;

pub use filename::sanitize_filename;
pub use local::LocalStorageBackend;
