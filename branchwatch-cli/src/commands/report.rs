//! Report command handler
//!
//! Queries the last build of every listed repository and prints the
//! results as a color-coded table (or JSON).

use std::sync::Arc;

use anyhow::{Context, Result};
use branchwatch_client::aggregate;
use branchwatch_core::domain::attribute::Attribute;
use branchwatch_core::domain::status::StatusRecord;
use clap::{Args, ValueEnum};
use tracing::{info, warn};

use super::RepoArgs;
use crate::config::Config;
use crate::render::{render_table, report_title};

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered, color-coded table
    #[default]
    Table,
    /// Pretty-printed JSON array of status records
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub repos: RepoArgs,

    /// Maximum number of simultaneous queries (0 = one per repository)
    #[arg(short = 'p', long, default_value_t = 0)]
    pub max_concurrency: usize,

    /// Comma-separated columns to show
    #[arg(long, value_delimiter = ',', default_values_t = Attribute::ALL.to_vec())]
    pub columns: Vec<Attribute>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Handle the report command
pub async fn handle_report_command(args: ReportArgs, config: &Config) -> Result<()> {
    let client = Arc::new(config.client()?);
    let refs = args.repos.load()?;

    if refs.is_empty() {
        warn!(
            "No repositories listed in {}",
            args.repos.repo_file.display()
        );
    }

    info!(
        "Reporting branch {} for {} repositories on {}",
        args.repos.branch,
        refs.len(),
        client.base_url()
    );

    let records = aggregate(client, &refs, args.max_concurrency).await;
    let output = build_report(&args.repos.branch, &records, &args.columns, args.format)?;

    println!("{}", output);

    Ok(())
}

/// Format collected records for output
pub fn build_report(
    branch: &str,
    records: &[StatusRecord],
    columns: &[Attribute],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(&report_title(branch), records, columns)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(records).context("Failed to serialize status records")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::{StatusCode, Uri};
    use branchwatch_core::domain::outcome::Outcome;
    use branchwatch_core::domain::repository::RepositoryRef;
    use std::time::Duration;

    const SVC_A_PATH: &str = "/job/Platform/job/svc-a/job/main/lastBuild/api/json";

    async fn fake_jenkins(uri: Uri) -> (StatusCode, String) {
        if uri.path() == SVC_A_PATH {
            let body = r#"{"url": "u1", "fullDisplayName": "A #1", "result": "SUCCESS",
                "building": false, "duration": 12000, "timestamp": 1700000000000}"#;
            (StatusCode::OK, body.to_string())
        } else {
            (StatusCode::NOT_FOUND, "Not Found".to_string())
        }
    }

    async fn spawn_server() -> String {
        let app = Router::new().fallback(fake_jenkins);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn cells(line: &str) -> Vec<String> {
        let parts: Vec<&str> = line.split('|').collect();
        parts[1..parts.len() - 1]
            .iter()
            .map(|c| c.trim().to_string())
            .collect()
    }

    async fn collect(base: &str) -> Vec<StatusRecord> {
        let config = Config {
            jenkins_host: base.to_string(),
            user: Some("bot".to_string()),
            token: Some("secret".to_string()),
            timeout: Duration::from_secs(5),
        };
        let client = Arc::new(config.client().unwrap());
        let repos = vec!["svc-a".to_string(), "svc-b".to_string()];
        let refs = RepositoryRef::for_branch("Platform", "main", &repos);
        aggregate(client, &refs, 0).await
    }

    #[tokio::test]
    async fn test_report_table_end_to_end() {
        colored::control::set_override(true);
        let base = spawn_server().await;
        let records = collect(&base).await;

        let table = build_report("main", &records, &Attribute::ALL, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[1].contains("Job Statuses. Branch: main"));

        let data_rows: Vec<&str> = lines[4..]
            .iter()
            .copied()
            .filter(|l| l.starts_with('|'))
            .collect();
        assert_eq!(data_rows.len(), 2);

        let first = cells(data_rows[0]);
        assert_eq!(first[0], "A #1");
        assert_eq!(first[1], "u1");
        assert!(first[2].starts_with("\u{1b}[32m") && first[2].contains("SUCCESS"));
        assert_eq!(first[3], "12 sec.");
        assert_eq!(first[4], "false");

        let second = cells(data_rows[1]);
        assert_eq!(second[0], "");
        assert_eq!(
            second[1],
            format!("{}/job/Platform/job/svc-b/job/main/lastBuild/api/json", base)
        );
        assert!(second[2].starts_with("\u{1b}[31m") && second[2].contains("FETCH ERROR"));
        assert_eq!(second[3], "");
        assert_eq!(second[4], "");
        assert_eq!(second[5], "");
    }

    #[tokio::test]
    async fn test_report_json() {
        let base = spawn_server().await;
        let records = collect(&base).await;

        let json = build_report("main", &records, &Attribute::ALL, OutputFormat::Json).unwrap();
        let parsed: Vec<StatusRecord> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, records);
        assert_eq!(parsed[0].result, Outcome::Success);
        assert_eq!(parsed[1].result, Outcome::FetchError);
        assert!(json.contains("\"FETCH ERROR\""));
    }
}
