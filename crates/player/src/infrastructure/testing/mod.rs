//! Test doubles for the HTTP boundary

pub mod fixtures;
mod in_memory_api;

pub use in_memory_api::{FailureMode, InMemoryCatalogApi};
