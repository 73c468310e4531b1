//! Category reference data.

pub mod model;

pub use model::{Category, CreateCategory};
