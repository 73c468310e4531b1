//! # docustore-entity
//!
//! Domain entity models for Docustore: users, taxonomy reference data
//! (categories and departments), documents, the folder/file hierarchy,
//! and sessions. All persisted models derive `sqlx::FromRow`.

pub mod category;
pub mod department;
pub mod document;
pub mod folder;
pub mod session;
pub mod user;
