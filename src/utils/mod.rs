//! Shared helpers

pub mod logger;
