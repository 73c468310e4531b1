//! HTTP API layer for Docustore.
//!
//! Routes mirror the screens of the original internal tool: session
//! gate, document store, taxonomy, user accounts, the folder file
//! manager, and reports. Responses are JSON envelopes.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
