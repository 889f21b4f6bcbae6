//! Service layer error types
//!
//! Every catalog operation reports failure through [`ServiceError`]; transport
//! details from [`ApiError`] are folded into it here.

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The requested record does not exist
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// The server refused the request for lack of credentials
    #[error("Not authorized")]
    Unauthorized,

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Request failed to send or never completed
    #[error("Request error: {0}")]
    Transport(String),

    /// Failed to encode the request or decode the response
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::RequestFailed(msg) => ServiceError::Transport(msg),
            ApiError::HttpError {
                status: 401 | 403, ..
            } => ServiceError::Unauthorized,
            ApiError::HttpError { status, message } => ServiceError::Server { status, message },
            ApiError::ParseError(msg) | ApiError::SerializeError(msg) => ServiceError::Parse(msg),
        }
    }
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        ServiceError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::NotFound { .. } | ServiceError::Server { status: 404, .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServiceError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::{api_http_error, api_request_failed};

    #[test]
    fn maps_auth_statuses_to_unauthorized() {
        assert!(ServiceError::from(api_http_error(401)).is_unauthorized());
        assert!(ServiceError::from(api_http_error(403)).is_unauthorized());
    }

    #[test]
    fn status_404_counts_as_not_found() {
        assert!(ServiceError::from(api_http_error(404)).is_not_found());
        assert!(!ServiceError::from(api_http_error(500)).is_not_found());
        assert!(ServiceError::not_found("movie", 3).is_not_found());
    }

    #[test]
    fn transport_failure_keeps_message() {
        let err = ServiceError::from(api_request_failed("connection refused"));
        assert_eq!(err, ServiceError::Transport("connection refused".into()));
        assert_eq!(err.to_string(), "Request error: connection refused");
    }
}
