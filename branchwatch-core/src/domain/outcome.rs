//! Build outcome domain type

use serde::{Deserialize, Serialize};

/// Literal shown for a repository whose status could not be fetched
pub const FETCH_ERROR: &str = "FETCH ERROR";

/// Result of the last build of a branch, as reported by the build server
/// or derived locally when the query itself failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    Success,
    Failure,
    Unstable,
    /// The server reported no result yet; the build is still running
    InProgress,
    /// Any other server-reported result (ABORTED, NOT_BUILT, ...)
    Other(String),
    /// Transport, status or parse failure while querying the server
    FetchError,
}

impl Outcome {
    /// Map the server's `result` field onto an outcome.
    ///
    /// Known names match case-insensitively; anything else is kept verbatim.
    /// A missing or blank result means the build has not finished yet.
    pub fn from_server(result: Option<&str>) -> Self {
        let Some(raw) = result.filter(|r| !r.trim().is_empty()) else {
            return Outcome::InProgress;
        };

        match raw.trim().to_ascii_uppercase().as_str() {
            "SUCCESS" => Outcome::Success,
            "FAILURE" => Outcome::Failure,
            "UNSTABLE" => Outcome::Unstable,
            _ => Outcome::Other(raw.to_string()),
        }
    }

    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Outcome::FetchError)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "SUCCESS"),
            Outcome::Failure => write!(f, "FAILURE"),
            Outcome::Unstable => write!(f, "UNSTABLE"),
            Outcome::InProgress => write!(f, "IN PROGRESS"),
            Outcome::Other(raw) => write!(f, "{}", raw),
            Outcome::FetchError => write!(f, "{}", FETCH_ERROR),
        }
    }
}

impl From<String> for Outcome {
    fn from(s: String) -> Self {
        match s.as_str() {
            FETCH_ERROR => Outcome::FetchError,
            "IN PROGRESS" => Outcome::InProgress,
            _ => Outcome::from_server(Some(&s)),
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.to_string()
    }
}
