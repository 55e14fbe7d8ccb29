//! Repository reference domain type

use serde::{Deserialize, Serialize};

/// One polled unit of work: a branch of a repository inside an
/// organizational folder on the build server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    /// Slash-separated folder hierarchy (e.g. "Digital/CTC/ATLAS")
    pub org_path: String,
    /// Repository name inside the folder
    pub repo: String,
    /// Branch name, possibly hierarchical (e.g. "feature/login")
    pub branch: String,
}

impl RepositoryRef {
    pub fn new(
        org_path: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            org_path: org_path.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    /// Build one reference per repository name, all sharing the same
    /// folder and branch.
    pub fn for_branch(org_path: &str, branch: &str, repos: &[String]) -> Vec<Self> {
        repos
            .iter()
            .map(|repo| Self::new(org_path, repo.as_str(), branch))
            .collect()
    }

    /// Job path of the folder, with each segment nested as its own job
    /// (`a/b` becomes `a/job/b`).
    pub fn job_path(&self) -> String {
        self.org_path.trim_matches('/').replace('/', "/job/")
    }

    /// Branch name with `/` percent-encoded so it stays one path segment
    pub fn encoded_branch(&self) -> String {
        self.branch.replace('/', "%2F")
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}", self.org_path, self.repo, self.branch)
    }
}
