//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod endpoints;
mod report;

use report::ReportArgs;

use std::path::PathBuf;

use anyhow::Result;
use branchwatch_core::domain::repository::RepositoryRef;
use clap::{Args, Subcommand};

use crate::config::Config;
use crate::repo_list::read_repos;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Query the last build of every repository and print a status table
    Report(ReportArgs),
    /// Print the endpoint each repository would be queried at
    Endpoints(RepoArgs),
}

/// Which repositories and branch to look at
#[derive(Args, Debug, Clone)]
pub struct RepoArgs {
    /// File with one repository name per line
    #[arg(short = 'r', long, default_value = "repolist.txt")]
    pub repo_file: PathBuf,

    /// Folder path of the repositories on the build server (e.g. Org/Team)
    #[arg(short = 'd', long, env = "JENKINS_DIR")]
    pub dir: String,

    /// Branch to report on
    #[arg(short = 'b', long)]
    pub branch: String,
}

impl RepoArgs {
    /// Read the repository list and pair every name with the folder and branch
    pub fn load(&self) -> Result<Vec<RepositoryRef>> {
        if self.dir.trim_matches('/').is_empty() {
            anyhow::bail!("dir cannot be empty");
        }

        if self.branch.trim().is_empty() {
            anyhow::bail!("branch cannot be empty");
        }

        let repos = read_repos(&self.repo_file)?;
        Ok(RepositoryRef::for_branch(&self.dir, &self.branch, &repos))
    }
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Report(args) => report::handle_report_command(args, config).await,
        Commands::Endpoints(args) => endpoints::handle_endpoints_command(args, config),
    }
}
