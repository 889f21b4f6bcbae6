//! Raw API Port - Object-safe HTTP boundary
//!
//! `ApiPort` is generic over response/request types which makes it not
//! object-safe. The composition root stores a `RawApiPort` behind
//! `Arc<dyn ...>` and the application layer wraps it in the typed `Api`.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// Returns `Ok(None)` when the server answers 404
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn post_empty(&self, path: &str) -> Result<(), ApiError>;

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
