//! Last-build DTO
//!
//! Subset of the JSON served at `.../lastBuild/api/json`. Unknown keys are
//! ignored; `url`, `fullDisplayName` and `building` are required.

use serde::{Deserialize, Serialize};

/// Last build of a job as reported by the build server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastBuild {
    /// Canonical URL of the build
    pub url: String,
    pub full_display_name: String,
    /// `null` while the build is still running
    pub result: Option<String>,
    pub building: bool,
    /// Elapsed time in milliseconds
    pub duration: Option<i64>,
    /// Start time in epoch milliseconds
    pub timestamp: Option<i64>,
}

impl LastBuild {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "_class": "org.jenkinsci.plugins.workflow.job.WorkflowRun",
            "url": "https://ci/job/org/job/svc-a/job/main/7/",
            "fullDisplayName": "org » svc-a » main #7",
            "result": "UNSTABLE",
            "building": false,
            "duration": 61500,
            "timestamp": 1700000000000,
            "number": 7
        }"#;

        let build = LastBuild::from_json(body).unwrap();
        assert_eq!(build.url, "https://ci/job/org/job/svc-a/job/main/7/");
        assert_eq!(build.full_display_name, "org » svc-a » main #7");
        assert_eq!(build.result.as_deref(), Some("UNSTABLE"));
        assert!(!build.building);
        assert_eq!(build.duration, Some(61_500));
        assert_eq!(build.timestamp, Some(1_700_000_000_000));
    }

    #[test]
    fn test_optional_fields_may_be_missing() {
        let body = r#"{"url": "u", "fullDisplayName": "A #1", "result": "SUCCESS", "building": false}"#;

        let build = LastBuild::from_json(body).unwrap();
        assert_eq!(build.duration, None);
        assert_eq!(build.timestamp, None);
    }

    #[test]
    fn test_null_result_while_building() {
        let body = r#"{"url": "u", "fullDisplayName": "A #2", "result": null, "building": true}"#;

        let build = LastBuild::from_json(body).unwrap();
        assert_eq!(build.result, None);
        assert!(build.building);
    }

    #[test]
    fn test_missing_required_key_is_an_error() {
        let body = r#"{"url": "u", "result": "SUCCESS", "building": false}"#;
        assert!(LastBuild::from_json(body).is_err());
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        assert!(LastBuild::from_json("<html>Bad gateway</html>").is_err());
    }
}
