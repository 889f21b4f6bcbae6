//! Infrastructure adapters: HTTP transport, platform services, test doubles.

pub mod http_client;
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use http_client::ApiAdapter;
