//! Endpoints command handler
//!
//! Dry run: shows where each repository would be queried without sending
//! any request.

use anyhow::{Context, Result};
use branchwatch_client::JenkinsClient;
use branchwatch_core::domain::repository::RepositoryRef;

use super::RepoArgs;
use crate::config::Config;

/// Handle the endpoints command
pub fn handle_endpoints_command(args: RepoArgs, config: &Config) -> Result<()> {
    // No request is sent, so credentials are optional here
    let client = JenkinsClient::new(
        config.jenkins_host.as_str(),
        config.user.clone().unwrap_or_default(),
        config.token.clone().unwrap_or_default(),
    )
    .context("Failed to build HTTP client")?;

    let refs = args.load()?;
    for url in list_endpoints(&client, &refs) {
        println!("{}", url);
    }

    Ok(())
}

pub fn list_endpoints(client: &JenkinsClient, refs: &[RepositoryRef]) -> Vec<String> {
    refs.iter().map(|repo| client.endpoint(repo)).collect()
}
