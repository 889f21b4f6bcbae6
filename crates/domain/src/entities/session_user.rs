//! Signed-in user profile as reported by the identity provider

use serde::{Deserialize, Serialize};

/// Profile of the externally authenticated user.
///
/// Read-only on the client; the identity provider owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
