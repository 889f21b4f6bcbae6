//! API Port - Typed HTTP boundary used by application services
//!
//! `ApiPort` is generic over request/response types, so it is not object-safe.
//! See [`super::RawApiPort`] for the boundary adapters implement.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Transport-level failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    /// Status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Typed REST operations
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    /// Like [`ApiPort::get`], but a 404 or an empty body yields `Ok(None)`
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    /// POST without a body; any response body is discarded
    async fn post_empty(&self, path: &str) -> Result<(), ApiError>;

    async fn patch<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
