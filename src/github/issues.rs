use serde::Deserialize;
use serde_json::{Map, Value};

/// An issue as returned by the issue listing endpoint.
///
/// Every attribute is optional; values of an unexpected JSON type are read as
/// absent rather than rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawIssue {
    pub id: Option<u64>,
    pub number: Option<u64>,
    pub title: Option<String>,
    pub html_url: Option<String>,
    pub state: Option<String>,
    pub labels: Vec<Label>,
    pub reactions: Option<Map<String, Value>>,
    pub user: Option<IssueAuthor>,
    pub created_at: Option<String>,
}

/// A label is either a bare name or an object with an optional name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Name(String),
    Object { name: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssueAuthor {
    pub login: Option<String>,
}

impl RawIssue {
    pub fn from_json(issue: &Value) -> Self {
        let string = |key: &str| issue[key].as_str().map(str::to_string);

        let labels = issue["labels"]
            .as_array()
            .map(|labels| {
                labels
                    .iter()
                    .filter_map(|label| Label::deserialize(label).ok())
                    .collect()
            })
            .unwrap_or_default();

        let user = issue["user"].as_object().map(|user| IssueAuthor {
            login: user.get("login").and_then(Value::as_str).map(str::to_string),
        });

        RawIssue {
            id: issue["id"].as_u64(),
            number: issue["number"].as_u64(),
            title: string("title"),
            html_url: string("html_url"),
            state: string("state"),
            labels,
            reactions: issue["reactions"].as_object().cloned(),
            user,
            created_at: string("created_at"),
        }
    }
}

pub fn parse_github_issues(issues_json: &[Value]) -> Vec<RawIssue> {
    issues_json.iter().map(RawIssue::from_json).collect()
}
