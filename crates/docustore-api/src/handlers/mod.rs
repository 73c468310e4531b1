//! HTTP handlers, one module per screen group.

pub mod auth;
pub mod categories;
pub mod departments;
pub mod documents;
pub mod file_manager;
pub mod health;
pub mod pages;
pub mod reports;
pub mod users;
