//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// File storage configuration.
///
/// Uploaded files live under `upload_root`, one subdirectory per folder ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all uploaded files.
    #[serde(default = "default_upload_root")]
    pub upload_root: String,
    /// Maximum upload size in bytes (default 100 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_root: default_upload_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_upload_root() -> String {
    "./uploads".to_string()
}

fn default_max_upload() -> u64 {
    104_857_600 // 100 MB
}
