//! Client configuration
//!
//! Defaults point at a local development backend. On native targets the
//! values can be overridden from the environment (after `.env` loading in the
//! binary); wasm builds use the defaults.

use anyhow::{bail, Context};
use marquee_domain::UserId;
use url::Url;

/// Default catalog REST API origin
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4001";

/// Default identity provider origin (serves `/api/auth/*`)
pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:3000";

/// Owner attached to movies created from this client
pub const DEFAULT_OWNER_ID: UserId = UserId::new(4);

pub const ENV_API_URL: &str = "MARQUEE_API_URL";
pub const ENV_AUTH_URL: &str = "MARQUEE_AUTH_URL";
pub const ENV_OWNER_ID: &str = "MARQUEE_OWNER_ID";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "MARQUEE_REQUEST_TIMEOUT_MS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Catalog API origin, without trailing slash
    pub api_base_url: String,
    /// Identity provider origin, without trailing slash
    pub auth_base_url: String,
    pub owner_id: UserId,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            owner_id: DEFAULT_OWNER_ID,
            request_timeout_ms: None,
        }
    }
}

impl ClientConfig {
    /// Build from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(raw) = get(ENV_API_URL) {
            config.api_base_url =
                normalize_base_url(&raw).with_context(|| format!("invalid {ENV_API_URL}"))?;
        }
        if let Some(raw) = get(ENV_AUTH_URL) {
            config.auth_base_url =
                normalize_base_url(&raw).with_context(|| format!("invalid {ENV_AUTH_URL}"))?;
        }
        if let Some(raw) = get(ENV_OWNER_ID) {
            config.owner_id = raw
                .parse::<UserId>()
                .with_context(|| format!("invalid {ENV_OWNER_ID}"))?;
        }
        if let Some(raw) = get(ENV_REQUEST_TIMEOUT_MS) {
            let ms = raw
                .parse::<u64>()
                .with_context(|| format!("invalid {ENV_REQUEST_TIMEOUT_MS}"))?;
            config.request_timeout_ms = (ms > 0).then_some(ms);
        }

        Ok(config)
    }

    pub fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.auth_base_url)
    }

    pub fn logout_url(&self) -> String {
        format!("{}/api/auth/logout", self.auth_base_url)
    }
}

fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let url = Url::parse(raw).with_context(|| format!("'{raw}' is not a URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("unsupported scheme '{}'", url.scheme());
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_local_backend() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:4001");
        assert_eq!(config.owner_id, UserId::new(4));
        assert_eq!(config.request_timeout_ms, None);
    }

    #[test]
    fn overrides_are_normalized() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://api.example.com/v1/"),
            (ENV_AUTH_URL, " https://auth.example.com "),
            (ENV_OWNER_ID, "17"),
            (ENV_REQUEST_TIMEOUT_MS, "2500"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(config.auth_base_url, "https://auth.example.com");
        assert_eq!(config.owner_id, UserId::new(17));
        assert_eq!(config.request_timeout_ms, Some(2500));
        assert_eq!(config.login_url(), "https://auth.example.com/api/auth/login");
        assert_eq!(config.logout_url(), "https://auth.example.com/api/auth/logout");
    }

    #[test]
    fn zero_timeout_means_none() {
        let config =
            ClientConfig::from_lookup(lookup(&[(ENV_REQUEST_TIMEOUT_MS, "0")])).unwrap();
        assert_eq!(config.request_timeout_ms, None);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_API_URL, "   ")])).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_API_URL, "ftp://files")])).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported scheme"));

        assert!(ClientConfig::from_lookup(lookup(&[(ENV_OWNER_ID, "four")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[(ENV_REQUEST_TIMEOUT_MS, "-1")])).is_err());
    }
}
