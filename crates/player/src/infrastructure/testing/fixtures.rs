//! Simple test fixtures used across unit tests.

use std::sync::Arc;

use marquee_domain::MovieFields;

use super::InMemoryCatalogApi;
use crate::application::Api;
use crate::ports::outbound::{ApiError, RawApiPort};

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn api_http_error(status: u16) -> ApiError {
    ApiError::HttpError {
        status,
        message: format!("status {status}"),
    }
}

/// Fresh in-memory backend plus a typed `Api` talking to it
pub fn catalog_api() -> (Arc<InMemoryCatalogApi>, Api) {
    let backend = Arc::new(InMemoryCatalogApi::new());
    let raw: Arc<dyn RawApiPort> = backend.clone();
    (backend, Api::new(raw))
}

pub fn fields(name: &str, poster_image: &str, score: f64) -> MovieFields {
    MovieFields {
        name: name.to_string(),
        poster_image: poster_image.to_string(),
        score,
    }
}

pub fn dune_fields() -> MovieFields {
    fields("Dune", "https://x/p.jpg", 9.0)
}
