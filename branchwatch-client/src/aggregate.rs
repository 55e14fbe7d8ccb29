//! Bounded concurrent status collection
//!
//! [`aggregate`] fans a list of repositories out to a [`StatusFetcher`] with
//! at most `max_concurrency` queries in flight, then reassembles the records
//! in input order.

use std::sync::Arc;

use async_trait::async_trait;
use branchwatch_core::domain::repository::RepositoryRef;
use branchwatch_core::domain::status::StatusRecord;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::JenkinsClient;

/// Source of last-build status records
///
/// Implemented by [`JenkinsClient`]; tests plug in stubs.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    /// Endpoint `repo` is queried at, used to label records of failed tasks
    fn endpoint(&self, repo: &RepositoryRef) -> String;

    /// Fetch the status of `repo`; failures are reported in the record
    async fn fetch_status(&self, repo: &RepositoryRef) -> StatusRecord;
}

#[async_trait]
impl StatusFetcher for JenkinsClient {
    fn endpoint(&self, repo: &RepositoryRef) -> String {
        JenkinsClient::endpoint(self, repo)
    }

    async fn fetch_status(&self, repo: &RepositoryRef) -> StatusRecord {
        JenkinsClient::fetch_status(self, repo).await
    }
}

/// Fetch the status of every repository in `refs`
///
/// At most `max_concurrency` fetches run at once; `0` means one slot per
/// repository and `1` runs them one after another. The returned records are
/// in the same order as `refs`, one per repository, whatever the order in
/// which the fetches complete.
pub async fn aggregate<F>(
    fetcher: Arc<F>,
    refs: &[RepositoryRef],
    max_concurrency: usize,
) -> Vec<StatusRecord>
where
    F: StatusFetcher + ?Sized + 'static,
{
    if refs.is_empty() {
        return Vec::new();
    }

    let slots = match max_concurrency {
        0 => refs.len(),
        n => n,
    }
    .min(Semaphore::MAX_PERMITS);

    info!(
        "Fetching status of {} repositories (max concurrency: {})",
        refs.len(),
        slots
    );

    let semaphore = Arc::new(Semaphore::new(slots));

    // Handles stay in input order; each one fills exactly its own slot
    let handles: Vec<_> = refs
        .iter()
        .cloned()
        .map(|repo| {
            let fetcher = Arc::clone(&fetcher);
            let semaphore = Arc::clone(&semaphore);
            tokio::spawn(async move {
                // Never closed, so this only waits for a free slot
                let _permit = semaphore.acquire_owned().await;
                fetcher.fetch_status(&repo).await
            })
        })
        .collect();

    let mut records = Vec::with_capacity(refs.len());
    for (repo, handle) in refs.iter().zip(handles) {
        let record = match handle.await {
            Ok(record) => record,
            Err(e) => {
                warn!("Status task for {} failed: {}", repo, e);
                StatusRecord::fetch_error(fetcher.endpoint(repo))
            }
        };
        records.push(record);
    }

    let failed = records.iter().filter(|r| r.result.is_fetch_error()).count();
    info!(
        "Collected {} status record(s), {} fetch error(s)",
        records.len(),
        failed
    );

    records
}
