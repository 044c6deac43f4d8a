use crate::config::Config;
use crate::error::RankError;
use crate::github::client::GitHubClient;
use crate::github::fetch::{PageSource, fetch_issues};
use crate::rank::rank_issues;
use crate::report::{render_markdown, write_report};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub issue_count: usize,
    pub output_path: PathBuf,
}

/// Runs the ranking job against the GitHub API.
pub async fn run(config: &Config) -> Result<RunSummary, RankError> {
    let client = GitHubClient::new(&config.token)?;
    run_with(config, &client, Utc::now).await
}

/// Fetches, ranks, renders and writes, in that order.
///
/// `clock` is read once, after fetching, to stamp the report.
pub async fn run_with<S, C>(
    config: &Config,
    source: &S,
    clock: C,
) -> Result<RunSummary, RankError>
where
    S: PageSource,
    C: FnOnce() -> DateTime<Utc>,
{
    tracing::info!("Starting feature ranking process...");
    tracing::info!("Repository: {}", config.repository);
    tracing::info!("Feature Label: {}", config.label);
    tracing::info!("Output File: {}", config.output_path.display());

    tracing::info!("Fetching open issues with label...");
    let issues = fetch_issues(source, config).await?;
    tracing::info!("Found {} open issues with the label.", issues.len());

    let ranked = rank_issues(issues);

    tracing::info!("Generating Markdown content...");
    let markdown = render_markdown(&ranked, &config.repository, clock());

    tracing::info!("Writing Markdown to {}...", config.output_path.display());
    write_report(&config.output_path, &markdown).await?;

    tracing::info!("✅ Successfully generated ranked features list!");
    Ok(RunSummary {
        issue_count: ranked.len(),
        output_path: config.output_path.clone(),
    })
}
