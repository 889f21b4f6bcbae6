//! Browser HTTP client (gloo-net / fetch)

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;

use super::{ack, decode_body, http_error, join_url};
use crate::ports::outbound::{ApiError, RawApiPort};

/// REST client rooted at one origin
///
/// Fetch has no per-request timeout; `with_timeout` accepts one for API
/// parity with the native client and ignores it.
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(base_url: &str, _timeout_ms: Option<u64>) -> Self {
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn request_failed(e: gloo_net::Error) -> ApiError {
    ApiError::RequestFailed(e.to_string())
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(request_failed)?;
    if !response.ok() {
        let reason = response.status_text();
        return Err(http_error(status, Some(reason.as_str()), &text));
    }
    decode_body(&text)
}

async fn read_ack(response: Response) -> Result<(), ApiError> {
    let text = response.text().await.map_err(request_failed)?;
    let reason = response.status_text();
    ack(response.status(), response.ok(), Some(reason.as_str()), &text)
}

#[async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        read_json(response).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        if response.status() == 404 {
            return Ok(None);
        }
        read_json(response).await.map(Some)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(request_failed)?;
        read_json(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        read_ack(response).await
    }

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = Request::patch(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(request_failed)?;
        read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        read_ack(response).await
    }
}
