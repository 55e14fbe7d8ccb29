//! Report column names

use serde::{Deserialize, Serialize};

/// A projectable column of a [`StatusRecord`](crate::domain::status::StatusRecord)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    JobName,
    JobUrl,
    Result,
    Duration,
    IsBuilding,
    Timestamp,
}

impl Attribute {
    /// Every column, in report order
    pub const ALL: [Attribute; 6] = [
        Attribute::JobName,
        Attribute::JobUrl,
        Attribute::Result,
        Attribute::Duration,
        Attribute::IsBuilding,
        Attribute::Timestamp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::JobName => "job_name",
            Attribute::JobUrl => "job_url",
            Attribute::Result => "result",
            Attribute::Duration => "duration",
            Attribute::IsBuilding => "is_building",
            Attribute::Timestamp => "timestamp",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                let known: Vec<&str> = Attribute::ALL.iter().map(|a| a.as_str()).collect();
                format!("unknown column '{}' (expected one of: {})", name, known.join(", "))
            })
    }
}
