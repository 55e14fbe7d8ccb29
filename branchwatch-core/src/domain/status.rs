//! Status record domain type
//!
//! A [`StatusRecord`] is the normalized outcome of querying one repository.
//! It is always populated with at least an endpoint and a result, so a
//! failed query still produces a row in the report.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::attribute::Attribute;
use crate::domain::outcome::Outcome;
use crate::dto::build::LastBuild;

/// Shown when the server does not report a build duration
pub const DEFAULT_DURATION: &str = "0s";

/// Shown when the server does not report a build start time
pub const NO_TIMESTAMP: &str = "--";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalized last-build status of one repository branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Canonical job URL on success, the queried endpoint on failure
    pub job_url: String,
    pub job_name: Option<String>,
    pub result: Outcome,
    pub duration: Option<String>,
    pub is_building: Option<bool>,
    pub timestamp: Option<String>,
}

impl StatusRecord {
    /// Record for a repository whose status could not be fetched
    pub fn fetch_error(endpoint: impl Into<String>) -> Self {
        Self {
            job_url: endpoint.into(),
            job_name: None,
            result: Outcome::FetchError,
            duration: None,
            is_building: None,
            timestamp: None,
        }
    }

    /// Normalize a server response, formatting the start time in the local
    /// time zone.
    pub fn from_build(build: LastBuild) -> Self {
        Self::from_build_in(build, &Local)
    }

    /// Normalize a server response, formatting the start time in `tz`
    pub fn from_build_in<Tz>(build: LastBuild, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            job_url: build.url,
            job_name: Some(build.full_display_name),
            result: Outcome::from_server(build.result.as_deref()),
            duration: Some(format_duration(build.duration)),
            is_building: Some(build.building),
            timestamp: Some(format_timestamp(build.timestamp, tz)),
        }
    }

    /// Display value of one column, `None` when the record has no value
    pub fn field(&self, attribute: Attribute) -> Option<String> {
        match attribute {
            Attribute::JobName => self.job_name.clone(),
            Attribute::JobUrl => Some(self.job_url.clone()),
            Attribute::Result => Some(self.result.to_string()),
            Attribute::Duration => self.duration.clone(),
            Attribute::IsBuilding => self.is_building.map(|b| b.to_string()),
            Attribute::Timestamp => self.timestamp.clone(),
        }
    }
}

/// Format a duration in milliseconds as rounded whole seconds
///
/// Halves round to the even second, so 12.5 s shows as `12 sec.`.
pub fn format_duration(duration_ms: Option<i64>) -> String {
    match duration_ms {
        Some(ms) => format!("{} sec.", (ms as f64 / 1000.0).round_ties_even() as i64),
        None => DEFAULT_DURATION.to_string(),
    }
}

/// Format an epoch-millisecond timestamp in `tz`
pub fn format_timestamp<Tz>(timestamp_ms: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp_ms
        .and_then(|ms| tz.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| NO_TIMESTAMP.to_string())
}
