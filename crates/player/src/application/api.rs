//! Typed API wrapper for application services.
//!
//! The composition root stores an object-safe `RawApiPort`; services are
//! generic over the typed `ApiPort`. `Api` bridges the two by wrapping an
//! `Arc<dyn RawApiPort>` and doing serde_json conversions.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        decode(value)
    }

    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        match self.raw.get_optional_json(path).await? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode(value).map(Some),
        }
    }

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value = encode(body)?;
        let value = self.raw.post_json(path, &body_value).await?;
        decode(value)
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.raw.post_empty(path).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value = encode(body)?;
        let value = self.raw.patch_json(path, &body_value).await?;
        decode(value)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.raw.delete(path).await
    }
}
