//! Session lifecycle.

pub mod manager;
