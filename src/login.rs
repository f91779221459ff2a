//! Login attempts against the identity provider.
//!
//! A login is tried against an ordered list of endpoints. A 404 means the
//! endpoint does not exist on that deployment and the next one is tried;
//! any other error status aborts the whole attempt. Transport errors skip
//! to the next endpoint. Cookies accumulate on one shared client session
//! across attempts and are returned as a name to value map on success.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::Credentials;

/// How long a single login POST may take.
const LOGIN_TIMEOUT: Duration = Duration::from_secs(60);

/// Browser-looking user agent; the login box rejects obvious bots.
const LOGIN_USER_AGENT: &str = "Mozilla/5.0";

/// Identity-provider login path relative to an environment base URL.
pub const LOGIN_PATH: &str = "/api/frontegg/identity/resources/auth/v1/user";

/// Tenant endpoint used when the environment does not proxy the provider.
pub const FALLBACK_LOGIN_URL: &str =
    "https://gs-erag.frontegg.com/frontegg/identity/resources/auth/v1/user";

// ============================================================================
// LoginEndpoint
// ============================================================================

/// One entry in the ordered login endpoint list.
#[derive(Debug, Clone)]
pub enum LoginEndpoint {
    /// Resolved against the environment base URL.
    Templated { path: String },
    /// Used verbatim, regardless of the base URL.
    Fixed { url: String },
}

impl LoginEndpoint {
    pub fn templated(path: impl Into<String>) -> Self {
        Self::Templated { path: path.into() }
    }

    pub fn fixed(url: impl Into<String>) -> Self {
        Self::Fixed { url: url.into() }
    }

    /// Concrete URL to POST to for the given environment.
    pub fn resolve(&self, base_url: &str) -> String {
        match self {
            Self::Templated { path } => format!("{base_url}{path}"),
            Self::Fixed { url } => url.clone(),
        }
    }
}

/// Endpoints tried in order: the environment's own proxy first, then the
/// shared tenant fallback.
pub fn default_endpoints() -> Vec<LoginEndpoint> {
    vec![
        LoginEndpoint::templated(LOGIN_PATH),
        LoginEndpoint::fixed(FALLBACK_LOGIN_URL),
    ]
}

// ============================================================================
// LoginClient
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    invitation_token: &'a str,
}

impl<'a> LoginRequest<'a> {
    fn new(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
            invitation_token: "",
        }
    }
}

/// Client for the identity-provider login flow.
pub struct LoginClient {
    client: Client,
    endpoints: Vec<LoginEndpoint>,
}

impl LoginClient {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_endpoints(default_endpoints())
    }

    /// Build a client trying a custom endpoint list in order.
    pub fn with_endpoints(endpoints: Vec<LoginEndpoint>) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(LOGIN_TIMEOUT)
            .user_agent(LOGIN_USER_AGENT)
            .cookie_store(true)
            .build()?;
        Ok(Self { client, endpoints })
    }

    /// Attempt to log in, returning the session's cookies on success.
    ///
    /// Returns `None` when every endpoint was exhausted or an endpoint
    /// answered with a hard error status. Never panics and never
    /// propagates an error.
    pub fn login(
        &self,
        base_url: &str,
        credentials: &Credentials,
    ) -> Option<HashMap<String, String>> {
        let payload = LoginRequest::new(credentials);
        let mut cookies = HashMap::new();

        for endpoint in &self.endpoints {
            let url = endpoint.resolve(base_url);
            info!("Attempting login via: {url}");

            let response = match self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .header(
                    "frontegg-requested-application-id",
                    credentials.application_id.as_str(),
                )
                .header("frontegg-source", "login-box")
                .json(&payload)
                .send()
            {
                Ok(response) => response,
                Err(err) => {
                    warn!("Login error: {err}");
                    continue;
                }
            };

            // Cookies from every response stay on the session, including
            // ones set by an endpoint that then answers 404.
            for cookie in response.cookies() {
                cookies.insert(cookie.name().to_string(), cookie.value().to_string());
            }

            let status = response.status();
            if status.is_success() {
                info!("LOGIN SUCCESSFUL");
                return Some(cookies);
            }
            if status == StatusCode::NOT_FOUND {
                info!("Login endpoint not found at {url}, trying next");
                continue;
            }
            error!("Login failed with HTTP status {status}");
            return None;
        }

        error!("All login attempts failed");
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
            application_id: "1".to_string(),
        }
    }

    #[test]
    fn templated_endpoint_appends_path_to_base() {
        let endpoint = LoginEndpoint::templated("/auth/v1/user");
        assert_eq!(
            endpoint.resolve("https://env.example.net"),
            "https://env.example.net/auth/v1/user"
        );
    }

    #[test]
    fn fixed_endpoint_ignores_base() {
        let endpoint = LoginEndpoint::fixed("https://tenant.example.com/auth");
        assert_eq!(
            endpoint.resolve("https://env.example.net"),
            "https://tenant.example.com/auth"
        );
    }

    #[test]
    fn default_endpoints_try_environment_then_tenant_fallback() {
        let endpoints = default_endpoints();
        assert_eq!(endpoints.len(), 2);
        assert_eq!(
            endpoints[0].resolve("https://env.example.net"),
            format!("https://env.example.net{LOGIN_PATH}")
        );
        assert_eq!(endpoints[1].resolve("https://env.example.net"), FALLBACK_LOGIN_URL);
    }

    #[test]
    fn payload_serializes_with_empty_invitation_token() {
        let credentials = credentials();
        let payload = LoginRequest::new(&credentials);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "email": "user@example.com",
                "password": "hunter2",
                "invitationToken": "",
            })
        );
    }
}
