//! Storage backend trait for the upload directory tree.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for serving file contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for the physical file store behind the folder hierarchy.
///
/// The [`StorageBackend`] trait is defined here in `docustore-core` and
/// implemented in `docustore-storage`. Paths are always relative
/// (`<folder_id>/<stored filename>`) and resolve under the backend root.
#[async_trait]
pub trait StorageBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Check whether the backend root is present and usable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a file and return its byte stream.
    async fn read(&self, path: &str) -> AppResult<ByteStream>;

    /// Write bytes to a new file at the given path, creating parent
    /// directories. Refuses to overwrite: an existing file at the path
    /// yields a conflict error.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
