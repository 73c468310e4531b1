//! Password hashing.

pub mod hasher;
