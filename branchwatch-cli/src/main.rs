//! Branchwatch CLI
//!
//! Reports the last build result of one branch across many repositories
//! on a Jenkins server.

mod commands;
mod config;
mod render;
mod repo_list;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "branchwatch")]
#[command(about = "Branch build status reporting", long_about = None)]
struct Cli {
    /// Build server host name or base URL
    #[arg(short = 'j', long, env = "JENKINS_HOST")]
    jenkins_host: String,

    /// User name for basic auth
    #[arg(short, long, env = "JENKINS_USER")]
    user: Option<String>,

    /// API token for basic auth
    #[arg(short, long, env = "JENKINS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "branchwatch=warn,branchwatch_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config {
        jenkins_host: cli.jenkins_host,
        user: cli.user,
        token: cli.token,
        timeout: Duration::from_secs(cli.timeout),
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
