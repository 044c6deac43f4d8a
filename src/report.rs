use crate::config::Repository;
use crate::error::RankError;
use crate::rank::RankedIssue;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

const EMPTY_NOTICE: &str = "_No open issues found with the specified label._\n";
const TABLE_HEADER: &str = "| Rank | 👍 | Feature Request | Issue |\n";
const TABLE_ALIGNMENT: &str = "| :--- | :-: | :-------------- | :---- |\n";
const SEPARATOR: &str = "\n---\n";
const FOOTER: &str =
    "_Generated with ❤️ by [Top Issues Action](https://github.com/ImGajeed76/top-issues)_";

/// Escapes `|` so a title cannot split a table cell.
pub fn escape_title(title: &str) -> String {
    title.replace('|', "\\|")
}

pub fn render_table_rows(issues: &[RankedIssue], repository: &Repository) -> String {
    issues
        .iter()
        .enumerate()
        .map(|(index, issue)| {
            let rank = index + 1;
            let link = format!("[{repository}#{}]({})", issue.number, issue.url);
            format!(
                "| {rank} | {} | {} | {link} |\n",
                issue.reaction_count,
                escape_title(&issue.title)
            )
        })
        .collect()
}

/// Renders the ranking document.
///
/// `now` is written as the update time, in RFC 3339 with millisecond
/// precision. An empty ranking renders a notice instead of a table.
pub fn render_markdown(
    issues: &[RankedIssue],
    repository: &Repository,
    now: DateTime<Utc>,
) -> String {
    let mut markdown = format!("### ✨ Top Feature Requests ({repository})\n\n");
    markdown.push_str(&format!(
        "*Updated: {}*\n\n",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));

    if issues.is_empty() {
        markdown.push_str(EMPTY_NOTICE);
    } else {
        markdown.push_str(TABLE_HEADER);
        markdown.push_str(TABLE_ALIGNMENT);
        markdown.push_str(&render_table_rows(issues, repository));
    }

    markdown.push_str(SEPARATOR);
    markdown.push_str(FOOTER);
    markdown
}

/// Writes `content` to `path`, creating missing parent directories.
///
/// The file is overwritten in a single write; no temporary file is used.
pub async fn write_report(path: &Path, content: &str) -> Result<(), RankError> {
    let io_error = |source| RankError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        tracing::info!("Ensured output directory exists: {}", parent.display());
    }

    tokio::fs::write(path, content).await.map_err(io_error)
}
