use crate::error::RankError;
use crate::github::fetch::{Page, PageSource};
use reqwest::header::{ACCEPT, LINK, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;

const API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("top-issues/", env!("CARGO_PKG_VERSION"));

/// Error body returned by the GitHub REST API.
#[derive(Deserialize, Debug, PartialEq)]
struct ApiErrorBody {
    message: String,
}

/// Issue listing client for the GitHub REST API.
pub struct GitHubClient {
    http: reqwest::Client,
    token: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self, RankError> {
        let http = reqwest::Client::builder().build()?;
        Ok(GitHubClient {
            http,
            token: token.to_string(),
        })
    }
}

impl PageSource for GitHubClient {
    async fn fetch_page(&self, url: &str) -> Result<Page, RankError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RankError::Fetch {
                status: Some(status.as_u16()),
                message: api_error_message(&body)
                    .or_else(|| status.canonical_reason().map(str::to_string))
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            });
        }

        let next = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_page_url);

        let body = response.json::<Value>().await?;
        match body {
            Value::Array(issues) => Ok(Page { issues, next }),
            other => Err(RankError::Fetch {
                status: Some(status.as_u16()),
                message: format!("expected a JSON array of issues, got: {other}"),
            }),
        }
    }
}

fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|error| error.message)
}

/// Extracts the `rel="next"` target from a `Link` header value.
///
/// # Arguments
///
/// * `link` - e.g. `<https://api.github.com/...&page=2>; rel="next", <...>; rel="last"`
///
/// # Returns
///
/// * `Some(url)` if a next link is present, otherwise `None`.
pub fn next_page_url(link: &str) -> Option<String> {
    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|target| target.strip_suffix('>'))
            .map(str::to_string)
    })
}
