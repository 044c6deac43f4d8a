use crate::github::issues::RawIssue;
use serde_json::Value;

/// An issue with its defaults applied, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedIssue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub url: String,
    pub reaction_count: u64,
    pub author: Option<String>,
    pub created_at: String,
}

impl From<RawIssue> for RankedIssue {
    fn from(issue: RawIssue) -> Self {
        let reaction_count = issue
            .reactions
            .as_ref()
            .and_then(|reactions| reactions.get("+1"))
            .and_then(Value::as_u64)
            .unwrap_or(0);

        RankedIssue {
            id: issue.id.unwrap_or_default(),
            number: issue.number.unwrap_or_default(),
            title: issue.title.unwrap_or_default(),
            url: issue.html_url.unwrap_or_default(),
            reaction_count,
            author: issue.user.and_then(|user| user.login),
            created_at: issue.created_at.unwrap_or_default(),
        }
    }
}

/// Ranks issues by descending "+1" reaction count.
///
/// The sort is stable: issues with equal counts keep their fetched order.
pub fn rank_issues(issues: Vec<RawIssue>) -> Vec<RankedIssue> {
    let mut ranked: Vec<RankedIssue> = issues.into_iter().map(RankedIssue::from).collect();
    ranked.sort_by(|a, b| b.reaction_count.cmp(&a.reaction_count));
    ranked
}
