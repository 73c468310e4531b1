//! JWT access token issuance and validation.

pub mod claims;
pub mod decoder;
pub mod encoder;
