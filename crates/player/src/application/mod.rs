//! Application layer: typed API access, configuration, and catalog services.

pub mod api;
pub mod config;
pub mod error;
pub mod services;

pub use api::Api;
pub use config::ClientConfig;
pub use error::ServiceError;
