//! Branchwatch HTTP Client
//!
//! Queries a Jenkins build server for the last build of repository branches
//! and normalizes the answers into [`StatusRecord`]s.
//!
//! Every query yields a record: transport, status and parse failures are
//! logged and reported as `FETCH ERROR` instead of being returned as errors.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use branchwatch_client::{JenkinsClient, aggregate};
//! use branchwatch_core::domain::repository::RepositoryRef;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(JenkinsClient::new("ci.example.com", "bot", "api-token")?);
//!
//!     let repos = vec!["svc-a".to_string(), "svc-b".to_string()];
//!     let refs = RepositoryRef::for_branch("Platform/Services", "main", &repos);
//!
//!     for record in aggregate(client, &refs, 4).await {
//!         println!("{} {}", record.job_url, record.result);
//!     }
//!     Ok(())
//! }
//! ```

mod aggregate;
pub mod error;
mod status;

// Re-export commonly used types
pub use aggregate::{StatusFetcher, aggregate};
pub use branchwatch_core::domain::status::StatusRecord;
pub use error::{ClientError, Result};

use std::time::Duration;

use branchwatch_core::dto::build::LastBuild;
use reqwest::{Client, StatusCode};

/// Per-request timeout used by [`JenkinsClient::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Jenkins JSON API
///
/// Requests are authenticated with HTTP basic auth (user name and API token).
#[derive(Clone)]
pub struct JenkinsClient {
    /// Base URL of the server (e.g., "https://ci.example.com")
    base_url: String,
    user: String,
    token: String,
    /// HTTP client instance
    client: Client,
}

impl JenkinsClient {
    /// Create a new client for `host`
    ///
    /// `host` is a bare host name (queried over `https://`) or a full base
    /// URL. Certificate validation is disabled: build servers on the
    /// internal network commonly use self-signed certificates.
    ///
    /// # Example
    /// ```
    /// use branchwatch_client::JenkinsClient;
    ///
    /// let client = JenkinsClient::new("ci.example.com", "bot", "api-token").unwrap();
    /// assert_eq!(client.base_url(), "https://ci.example.com");
    /// ```
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let client = Self::http_client(DEFAULT_TIMEOUT)?;
        Ok(Self::with_client(host, user, token, client))
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        host: impl Into<String>,
        user: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            base_url: normalize_base_url(&host.into()),
            user: user.into(),
            token: token.into(),
            client,
        }
    }

    /// Build the HTTP client used to talk to the build server
    pub fn http_client(timeout: Duration) -> Result<Client> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(timeout)
            .build()?;
        Ok(client)
    }

    /// Get the base URL of the build server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and decode a last-build document
    ///
    /// Only `200 OK` is accepted; any other status is an API error.
    async fn handle_response(&self, response: reqwest::Response) -> Result<LastBuild> {
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        LastBuild::from_json(&body).map_err(|e| {
            ClientError::ParseError(format!("Failed to parse JSON response: {}; body: {}", e, body))
        })
    }
}

impl std::fmt::Debug for JenkinsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JenkinsClient")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("token", &"***")
            .finish()
    }
}

/// Prefix bare host names with `https://` and drop trailing slashes
fn normalize_base_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = JenkinsClient::new("ci.example.com", "bot", "secret").unwrap();
        assert_eq!(client.base_url(), "https://ci.example.com");
    }

    #[test]
    fn test_client_keeps_explicit_scheme() {
        let client =
            JenkinsClient::with_client("http://127.0.0.1:8080/", "bot", "secret", Client::new());
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = JenkinsClient::with_client("ci.example.com/", "bot", "secret", Client::new());
        assert_eq!(client.base_url(), "https://ci.example.com");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = JenkinsClient::with_client("ci.example.com", "bot", "secret", Client::new());
        let debug = format!("{:?}", client);
        assert!(debug.contains("bot"));
        assert!(!debug.contains("secret"));
    }
}
