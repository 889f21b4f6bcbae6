//! Native HTTP client (reqwest)

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

use super::{ack, decode_body, http_error, join_url};
use crate::ports::outbound::{ApiError, RawApiPort};

/// REST client rooted at one origin
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, None)
    }

    /// Create a client whose requests give up after `timeout_ms`
    pub fn with_timeout(base_url: &str, timeout_ms: Option<u64>) -> Self {
        let mut builder = Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn request_failed(e: reqwest::Error) -> ApiError {
    ApiError::RequestFailed(e.to_string())
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(request_failed)?;
    if !status.is_success() {
        return Err(http_error(status.as_u16(), status.canonical_reason(), &text));
    }
    decode_body(&text)
}

async fn read_ack(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(request_failed)?;
    ack(status.as_u16(), status.is_success(), status.canonical_reason(), &text)
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        read_json(response).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        read_json(response).await.map(Some)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(request_failed)?;
        read_json(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        read_ack(response).await
    }

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(request_failed)?;
        read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        read_ack(response).await
    }
}
