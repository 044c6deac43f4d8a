use crate::config::{Config, Repository};
use crate::error::RankError;
use crate::github::issues::{RawIssue, parse_github_issues};
use serde_json::Value;

/// Number of issues requested per page.
pub const PER_PAGE: u32 = 100;

/// One page of the issue listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub issues: Vec<Value>,
    /// Absolute URL of the following page, if any.
    pub next: Option<String>,
}

/// Abstract source of issue listing pages
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetch the page at `url`.
    async fn fetch_page(&self, url: &str) -> Result<Page, RankError>;
}

/// Builds the URL of the first page of open issues carrying `label`.
pub fn issues_url(
    api_url: &str,
    repository: &Repository,
    label: &str,
) -> Result<String, RankError> {
    let base = format!(
        "{}/repos/{}/{}/issues",
        api_url, repository.owner, repository.name
    );
    let per_page = PER_PAGE.to_string();
    let url = reqwest::Url::parse_with_params(
        &base,
        &[
            ("state", "open"),
            ("labels", label),
            ("per_page", per_page.as_str()),
        ],
    )
    .map_err(|e| RankError::configuration(format!("invalid API URL '{base}': {e}")))?;
    Ok(url.into())
}

/// Lazily walks the pages of an issue listing.
///
/// Each call to [`IssuePages::next_page`] performs at most one request. Once
/// the last page has been returned the sequence stays exhausted.
pub struct IssuePages<'a, S> {
    source: &'a S,
    next: Option<String>,
}

impl<'a, S: PageSource> IssuePages<'a, S> {
    pub fn new(source: &'a S, first_url: String) -> Self {
        IssuePages {
            source,
            next: Some(first_url),
        }
    }

    pub async fn next_page(&mut self) -> Result<Option<Vec<RawIssue>>, RankError> {
        let Some(url) = self.next.take() else {
            return Ok(None);
        };
        tracing::debug!(%url, "Fetching issue page");
        let page = self.source.fetch_page(&url).await?;
        self.next = page.next;
        Ok(Some(parse_github_issues(&page.issues)))
    }
}

/// Fetches every open issue carrying the configured label, in API order.
pub async fn fetch_issues<S: PageSource>(
    source: &S,
    config: &Config,
) -> Result<Vec<RawIssue>, RankError> {
    let first_url = issues_url(&config.api_url, &config.repository, &config.label)?;
    let mut pages = IssuePages::new(source, first_url);
    let mut all_issues = Vec::new();

    while let Some(issues) = pages.next_page().await? {
        all_issues.extend(issues);
    }

    Ok(all_issues)
}
