//! Folder hierarchy entities.

pub mod file;
pub mod model;

pub use file::{CreateFolderFile, FolderFile};
pub use model::{CreateFolder, Folder};
