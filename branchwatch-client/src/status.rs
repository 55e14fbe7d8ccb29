//! Last-build status endpoints

use branchwatch_core::domain::repository::RepositoryRef;
use branchwatch_core::domain::status::StatusRecord;
use branchwatch_core::dto::build::LastBuild;
use tracing::{debug, warn};

use crate::JenkinsClient;
use crate::error::Result;

impl JenkinsClient {
    /// Query endpoint for the last build of `repo`
    ///
    /// Folder segments become nested `job/` segments and the branch is
    /// percent-encoded, so `Org/Team`, `svc`, `feature/x` resolves to
    /// `{base}/job/Org/job/Team/job/svc/job/feature%2Fx/lastBuild/api/json`.
    pub fn endpoint(&self, repo: &RepositoryRef) -> String {
        format!(
            "{}/job/{}/job/{}/job/{}/lastBuild/api/json",
            self.base_url,
            repo.job_path(),
            repo.repo,
            repo.encoded_branch()
        )
    }

    /// Fetch and normalize the last build status of `repo`
    ///
    /// Never fails: any error is logged and returned as a `FETCH ERROR`
    /// record carrying the queried endpoint.
    pub async fn fetch_status(&self, repo: &RepositoryRef) -> StatusRecord {
        let url = self.endpoint(repo);
        debug!("Fetching last build of {} from {}", repo, url);

        match self.last_build(&url).await {
            Ok(build) => StatusRecord::from_build(build),
            Err(e) => {
                if e.is_not_found() {
                    warn!("No last build found for {} at {}", repo, url);
                } else if e.is_client_error() {
                    warn!("Request for {} rejected by the server: {}", repo, e);
                } else if e.is_server_error() {
                    warn!("Server failed to report {}: {}", repo, e);
                } else {
                    warn!("error fetching {}: {}", url, e);
                }
                StatusRecord::fetch_error(url)
            }
        }
    }

    /// Get the raw last-build document at `url`
    pub async fn last_build(&self, url: &str) -> Result<LastBuild> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.user, Some(&self.token))
            .send()
            .await?;

        self.handle_response(response).await
    }
}
