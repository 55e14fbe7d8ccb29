//! Configuration module
//!
//! Handles CLI configuration: build server location, credentials and
//! request timeout.

use std::time::Duration;

use anyhow::{Context, Result};
use branchwatch_client::JenkinsClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Build server host name or base URL
    pub jenkins_host: String,

    /// User name for basic auth
    pub user: Option<String>,

    /// API token for basic auth
    pub token: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    /// Validates the settings every command needs
    pub fn validate(&self) -> Result<()> {
        if self.jenkins_host.trim().is_empty() {
            anyhow::bail!("jenkins host cannot be empty");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// User name and token, required for any command that talks to the server
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let user = self
            .user
            .as_deref()
            .filter(|u| !u.is_empty())
            .context("no user given (use --user or JENKINS_USER)")?;
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .context("no API token given (use --token or JENKINS_TOKEN)")?;

        Ok((user, token))
    }

    /// Build an authenticated client for the configured server
    pub fn client(&self) -> Result<JenkinsClient> {
        let (user, token) = self.credentials()?;
        let http = JenkinsClient::http_client(self.timeout)
            .context("Failed to build HTTP client")?;

        Ok(JenkinsClient::with_client(
            self.jenkins_host.as_str(),
            user,
            token,
            http,
        ))
    }
}
