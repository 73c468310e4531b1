//! Local filesystem storage backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::debug;

use docustore_core::error::{AppError, ErrorKind};
use docustore_core::result::AppResult;
use docustore_core::traits::storage::{ByteStream, StorageBackend};

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorageBackend {
    /// Root directory for all stored files.
    root: PathBuf,
}

impl LocalStorageBackend {
    /// Create a new local storage backend rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a relative path to an absolute path within the root.
    fn resolve(&self, path: &str) -> PathBuf {
        let clean = path.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for LocalStorageBackend {
    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn read(&self, path: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(path);
        let file = fs::File::open(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open file: {path}"),
                    e,
                )
            }
        })?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream.map(|r| r.map(|b| b.into()))))
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path);
        self.ensure_parent(&full_path).await?;

        // create_new makes the write exclusive: a concurrent upload that
        // raced past the caller's existence check fails here instead of
        // clobbering the earlier file.
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    AppError::conflict(format!("File already exists: {path}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to create file: {path}"),
                        e,
                    )
                }
            })?;

        file.write_all(&data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Wrote file");
        Ok(())
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let full_path = self.resolve(path);
        Ok(full_path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn read_all(backend: &LocalStorageBackend, path: &str) -> Vec<u8> {
        let mut stream = backend.read(path).await.unwrap();
        let mut collected = Vec::new();
        while let Some(chunk) = stream.next().await {
            collected.extend_from_slice(&chunk.unwrap());
        }
        collected
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let backend = LocalStorageBackend::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let data = Bytes::from("hello world");
        backend
            .write("folder-1/file.txt", data.clone())
            .await
            .unwrap();

        assert!(backend.exists("folder-1/file.txt").await.unwrap());
        assert_eq!(read_all(&backend, "folder-1/file.txt").await, data);
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let backend = LocalStorageBackend::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let err = backend.read("nope/missing.txt").await.err().unwrap();
        assert_eq!(err.kind, docustore_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_streamed_read_matches_written_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let backend = LocalStorageBackend::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let data = Bytes::from(vec![7u8; 64 * 1024]);
        backend.write("big.bin", data.clone()).await.unwrap();

        assert_eq!(read_all(&backend, "big.bin").await, data);
    }

    #[tokio::test]
    async fn test_write_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let backend = LocalStorageBackend::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        backend
            .write("f/report.pdf", Bytes::from("first"))
            .await
            .unwrap();
        let err = backend
            .write("f/report.pdf", Bytes::from("second"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, docustore_core::error::ErrorKind::Conflict);
        assert_eq!(read_all(&backend, "f/report.pdf").await, b"first");
    }
}
