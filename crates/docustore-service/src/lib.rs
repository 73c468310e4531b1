//! Business logic services for Docustore.
//!
//! Each service owns one area of the application: documents, taxonomy
//! (categories and departments), user accounts, the folder file store,
//! and reporting. Handlers stay thin; validation and authorization
//! decisions live here.

pub mod category;
pub mod context;
pub mod department;
pub mod document;
pub mod folder;
pub mod report;
pub mod user;

pub use context::RequestContext;
