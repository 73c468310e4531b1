//! Department reference data.

pub mod model;

pub use model::{CreateDepartment, Department};
