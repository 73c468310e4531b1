//! # docustore-core
//!
//! Core crate for Docustore. Contains configuration schemas, the storage
//! backend trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Docustore crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
