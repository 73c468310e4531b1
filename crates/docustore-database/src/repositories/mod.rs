//! Concrete repository implementations, one per entity, plus the
//! read-only reporting queries.

pub mod category;
pub mod department;
pub mod document;
pub mod folder;
pub mod folder_file;
pub mod report;
pub mod session;
pub mod user;
