//! Folder hierarchy and file store service.

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use docustore_core::config::StorageConfig;
use docustore_core::error::{AppError, ErrorKind};
use docustore_core::result::AppResult;
use docustore_core::traits::storage::{ByteStream, StorageBackend};
use docustore_database::repositories::folder::FolderRepository;
use docustore_database::repositories::folder_file::FolderFileRepository;
use docustore_entity::folder::file::{CreateFolderFile, FolderFile};
use docustore_entity::folder::model::{CreateFolder, Folder};
use docustore_storage::filename::{dedupe_filename, sanitize_filename};

/// A single-level view into the folder tree.
#[derive(Debug, Clone, Serialize)]
pub struct FolderView {
    pub folder: Folder,
    pub subfolders: Vec<Folder>,
    pub files: Vec<FolderFile>,
}

/// Parameters for a file upload into a folder.
#[derive(Debug, Clone)]
pub struct UploadParams {
    pub folder_id: Uuid,
    pub title: String,
    pub filename: String,
    pub data: Bytes,
}

#[derive(Clone)]
pub struct FolderService {
    folders: Arc<FolderRepository>,
    files: Arc<FolderFileRepository>,
    storage: Arc<dyn StorageBackend>,
    config: StorageConfig,
}

impl std::fmt::Debug for FolderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderService").finish()
    }
}

impl FolderService {
    pub fn new(
        folders: Arc<FolderRepository>,
        files: Arc<FolderFileRepository>,
        storage: Arc<dyn StorageBackend>,
        config: StorageConfig,
    ) -> Self {
        Self {
            folders,
            files,
            storage,
            config,
        }
    }

    /// List top-level folders, newest first.
    pub async fn list_roots(&self) -> AppResult<Vec<Folder>> {
        self.folders.find_roots().await
    }

    /// Browse one folder: the folder itself, its immediate subfolders,
    /// and its files.
    pub async fn browse(&self, folder_id: Uuid) -> AppResult<FolderView> {
        let folder = self
            .folders
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        let subfolders = self.folders.find_children(folder_id).await?;
        let files = self.files.find_by_folder(folder_id).await?;
        Ok(FolderView {
            folder,
            subfolders,
            files,
        })
    }

    /// Create a folder, optionally nested under a parent.
    pub async fn create_folder(&self, name: &str, parent_id: Option<Uuid>) -> AppResult<Folder> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name is required"));
        }
        let folder = self
            .folders
            .create(&CreateFolder {
                name: name.to_string(),
                parent_id,
            })
            .await?;
        info!(folder_id = %folder.id, "Folder created");
        Ok(folder)
    }

    /// Store an uploaded file inside a folder.
    ///
    /// The client filename is sanitized before touching the disk. When
    /// the sanitized name is already taken in the folder, a unique suffix
    /// is added. The pre-check is racy on its own, so the backend write
    /// is exclusive-create; a concurrent upload that loses the race
    /// retries under a fresh suffixed name instead of overwriting.
    pub async fn upload(&self, params: UploadParams) -> AppResult<FolderFile> {
        let title = params.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if params.data.is_empty() {
            return Err(AppError::validation("A file is required"));
        }
        if params.data.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }

        let folder = self
            .folders
            .find_by_id(params.folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        let safe_name = sanitize_filename(&params.filename)
            .ok_or_else(|| AppError::validation("Invalid filename"))?;

        let mut stored_name = safe_name.clone();
        let mut stored_path = format!("{}/{}", folder.id, stored_name);
        if self.files.exists_stored_path(folder.id, &stored_path).await?
            || self.storage.exists(&stored_path).await?
        {
            stored_name = dedupe_filename(&safe_name);
            stored_path = format!("{}/{}", folder.id, stored_name);
        }

        let mut attempts = 0;
        loop {
            match self.storage.write(&stored_path, params.data.clone()).await {
                Ok(()) => break,
                Err(e) if e.kind == ErrorKind::Conflict && attempts < 3 => {
                    attempts += 1;
                    stored_name = dedupe_filename(&safe_name);
                    stored_path = format!("{}/{}", folder.id, stored_name);
                }
                Err(e) => return Err(e),
            }
        }

        let file = self
            .files
            .create(&CreateFolderFile {
                folder_id: folder.id,
                title: title.to_string(),
                filename: safe_name,
                stored_path,
            })
            .await?;

        info!(file_id = %file.id, folder_id = %folder.id, "File uploaded");
        Ok(file)
    }

    /// Resolve a file record and open its contents for download.
    pub async fn download(&self, file_id: Uuid) -> AppResult<(FolderFile, ByteStream)> {
        let file = self
            .files
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;
        let stream = self.storage.read(&file.stored_path).await?;
        Ok((file, stream))
    }
}
