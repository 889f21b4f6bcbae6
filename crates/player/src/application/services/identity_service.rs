//! Identity Service - Reads the session profile from the identity provider
//!
//! The provider owns login, logout and the session cookie. This service only
//! asks who is signed in and reports it in the `{user, error, is_loading}`
//! shape the identity gate consumes.

use marquee_domain::SessionUser;

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// Profile endpoint of the identity provider
const PROFILE_PATH: &str = "/api/auth/me";

/// Point-in-time view of the external session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentitySnapshot {
    pub user: Option<SessionUser>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl IdentitySnapshot {
    /// Snapshot shown before the profile request completes
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn from_result(result: Result<Option<SessionUser>, ServiceError>) -> Self {
        match result {
            Ok(user) => Self {
                user,
                ..Self::default()
            },
            Err(e) => Self {
                error: Some(e.to_string()),
                ..Self::default()
            },
        }
    }
}

#[derive(Clone)]
pub struct IdentityService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> IdentityService<A> {
    /// `api` must be rooted at the identity provider's origin
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The signed-in user, or `None` when nobody is signed in
    pub async fn fetch_user(&self) -> Result<Option<SessionUser>, ServiceError> {
        match self.api.get_optional::<SessionUser>(PROFILE_PATH).await {
            Ok(user) => Ok(user),
            Err(e) => {
                let error = ServiceError::from(e);
                if error.is_unauthorized() {
                    return Ok(None);
                }
                tracing::warn!(error = %error, "Failed to read session profile");
                Err(error)
            }
        }
    }

    pub async fn snapshot(&self) -> IdentitySnapshot {
        IdentitySnapshot::from_result(self.fetch_user().await)
    }
}
